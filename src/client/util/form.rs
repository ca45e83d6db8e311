//! Seller ticket form: raw input as typed, validated into a `NewTicketDto`.

use std::fmt;

use thiserror::Error;

use crate::model::ticket::{NewTicketDto, SellerDto, TicketPatchDto, TransportType, PERK_OPTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketField {
    Name,
    From,
    To,
    TransportType,
    Quantity,
    Price,
    DepartureDate,
    DepartureTime,
    Image,
}

impl TicketField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Ticket title",
            Self::From => "From",
            Self::To => "To",
            Self::TransportType => "Transport type",
            Self::Quantity => "Quantity",
            Self::Price => "Price",
            Self::DepartureDate => "Departure date",
            Self::DepartureTime => "Departure time",
            Self::Image => "Image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: TicketField,
    pub message: String,
}

/// Every field-level problem found in one submission.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [only] => f.write_str(&only.message),
            _ => f.write_str("Please fix the highlighted fields"),
        }
    }
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn message(&self, field: TicketField) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    fn push(&mut self, field: TicketField, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    fn required(&mut self, field: TicketField, value: &str) {
        if value.trim().is_empty() {
            self.push(field, format!("{} is required", field.label()));
        }
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Ticket form contents exactly as entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketForm {
    pub name: String,
    pub from: String,
    pub to: String,
    pub transport_type: String,
    pub quantity: String,
    pub price: String,
    pub departure_date: String,
    pub departure_time: String,
    pub perks: Vec<String>,
    pub image: String,
}

impl TicketForm {
    /// Add or remove a perk, keeping the order of the perk checkboxes.
    pub fn toggle_perk(&mut self, perk: &str) {
        if self.perks.iter().any(|p| p == perk) {
            self.perks.retain(|p| p != perk);
        } else {
            self.perks.push(perk.to_string());
            self.perks.sort_by_key(|p| {
                PERK_OPTIONS
                    .iter()
                    .position(|option| option == p)
                    .unwrap_or(PERK_OPTIONS.len())
            });
        }
    }

    pub fn has_perk(&self, perk: &str) -> bool {
        self.perks.iter().any(|p| p == perk)
    }

    /// Validate every field and build the creation body with `seller` as the owner.
    pub fn validate(&self, seller: SellerDto) -> Result<NewTicketDto, FormErrors> {
        let mut errors = FormErrors::default();

        errors.required(TicketField::Name, &self.name);
        errors.required(TicketField::From, &self.from);
        errors.required(TicketField::To, &self.to);
        errors.required(TicketField::DepartureDate, &self.departure_date);
        errors.required(TicketField::DepartureTime, &self.departure_time);
        errors.required(TicketField::Image, &self.image);

        let transport_type = TransportType::parse(&self.transport_type);
        if transport_type.is_none() {
            errors.push(TicketField::TransportType, "Transport type is required");
        }

        let quantity = check_quantity(&mut errors, &self.quantity);
        let price = check_price(&mut errors, &self.price);

        errors.into_result(|| NewTicketDto {
            name: self.name.trim().to_string(),
            image: self.image.trim().to_string(),
            from: self.from.trim().to_string(),
            to: self.to.trim().to_string(),
            transport_type: transport_type.unwrap_or_default(),
            price: price.unwrap_or_default(),
            quantity: quantity.unwrap_or_default(),
            departure_date: self.departure_date.trim().to_string(),
            departure_time: self.departure_time.trim().to_string(),
            perks: self.perks.clone(),
            seller,
        })
    }
}

/// Price and quantity edit on an existing inventory ticket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryEdit {
    pub price: String,
    pub quantity: String,
}

impl InventoryEdit {
    pub fn validate(&self) -> Result<TicketPatchDto, FormErrors> {
        let mut errors = FormErrors::default();
        let quantity = check_quantity(&mut errors, &self.quantity);
        let price = check_price(&mut errors, &self.price);

        errors.into_result(|| TicketPatchDto {
            price,
            quantity,
            ..Default::default()
        })
    }
}

fn check_quantity(errors: &mut FormErrors, input: &str) -> Option<u32> {
    let input = input.trim();
    if input.is_empty() {
        errors.push(TicketField::Quantity, "Quantity is required");
        return None;
    }

    match input.parse::<i64>() {
        Ok(quantity) if quantity >= 1 => u32::try_from(quantity).ok(),
        Ok(_) => {
            errors.push(TicketField::Quantity, "Quantity must be at least 1");
            None
        }
        Err(_) => {
            errors.push(TicketField::Quantity, "Quantity must be a whole number");
            None
        }
    }
}

fn check_price(errors: &mut FormErrors, input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        errors.push(TicketField::Price, "Price is required");
        return None;
    }

    match input.parse::<f64>() {
        Ok(price) if price.is_finite() && price > 0.0 => Some(price),
        Ok(_) => {
            errors.push(TicketField::Price, "Price must be greater than 0");
            None
        }
        Err(_) => {
            errors.push(TicketField::Price, "Price must be a number");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller() -> SellerDto {
        SellerDto {
            name: "Green Line".to_string(),
            email: "seller@example.com".to_string(),
            image: None,
        }
    }

    fn filled() -> TicketForm {
        TicketForm {
            name: " Night Coach ".to_string(),
            from: "Dhaka".to_string(),
            to: "Cox's Bazar".to_string(),
            transport_type: "Bus".to_string(),
            quantity: "40".to_string(),
            price: "12.5".to_string(),
            departure_date: "2025-04-10".to_string(),
            departure_time: "22:00".to_string(),
            perks: vec!["AC".to_string()],
            image: "https://img.example.com/coach.jpg".to_string(),
        }
    }

    #[test]
    fn valid_form_builds_ticket() {
        let ticket = filled().validate(seller()).unwrap();

        assert_eq!(ticket.name, "Night Coach");
        assert_eq!(ticket.transport_type, TransportType::Bus);
        assert_eq!(ticket.quantity, 40);
        assert_eq!(ticket.price, 12.5);
        assert_eq!(ticket.seller.email, "seller@example.com");
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = TicketForm::default().validate(seller()).unwrap_err();

        assert_eq!(errors.len(), 9);
        assert_eq!(
            errors.message(TicketField::Name),
            Some("Ticket title is required")
        );
        assert_eq!(
            errors.message(TicketField::Quantity),
            Some("Quantity is required")
        );
        assert_eq!(errors.to_string(), "Please fix the highlighted fields");
    }

    #[test]
    fn quantity_and_price_bounds() {
        let mut form = filled();
        form.quantity = "0".to_string();
        form.price = "0".to_string();

        let errors = form.validate(seller()).unwrap_err();

        assert_eq!(
            errors.message(TicketField::Quantity),
            Some("Quantity must be at least 1")
        );
        assert_eq!(
            errors.message(TicketField::Price),
            Some("Price must be greater than 0")
        );
    }

    #[test]
    fn single_error_is_its_own_summary() {
        let mut form = filled();
        form.price = "free".to_string();

        let errors = form.validate(seller()).unwrap_err();

        assert_eq!(errors.to_string(), "Price must be a number");
    }

    #[test]
    fn perks_keep_checkbox_order() {
        let mut form = TicketForm::default();
        form.toggle_perk("WiFi");
        form.toggle_perk("AC");
        form.toggle_perk("Pillow");
        form.toggle_perk("WiFi");

        assert_eq!(form.perks, vec!["AC", "Pillow"]);
        assert!(form.has_perk("AC"));
        assert!(!form.has_perk("WiFi"));
    }

    #[test]
    fn inventory_edit_only_patches_price_and_quantity() {
        let edit = InventoryEdit {
            price: "30".to_string(),
            quantity: "5".to_string(),
        };

        let patch = edit.validate().unwrap();

        assert_eq!(patch.price, Some(30.0));
        assert_eq!(patch.quantity, Some(5));
        assert_eq!(patch.status, None);
        assert_eq!(patch.is_advertised, None);
    }
}
