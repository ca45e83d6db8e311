//! Client-side search, sort and pagination over an already-fetched ticket list.

use crate::model::ticket::{TicketDto, TransportType};

pub const PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Keep the order the backend returned.
    #[default]
    Default,
    LowToHigh,
    HighToLow,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [Self::Default, Self::LowToHigh, Self::HighToLow];

    /// Value used by the sort `<select>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::LowToHigh => "low-to-high",
            Self::HighToLow => "high-to-low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::LowToHigh => "Price: Low to High",
            Self::HighToLow => "Price: High to Low",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == value)
            .unwrap_or_default()
    }
}

/// Stable sort by unit price; `Default` returns the input order untouched.
pub fn sort_tickets(tickets: &[TicketDto], mode: SortMode) -> Vec<TicketDto> {
    let mut sorted = tickets.to_vec();

    match mode {
        SortMode::Default => {}
        SortMode::LowToHigh => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::HighToLow => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    sorted
}

/// Route search; empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    pub from: String,
    pub to: String,
    pub transport: Option<TransportType>,
}

impl CatalogFilter {
    /// Filter on origin and destination only.
    pub fn route(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            transport: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.trim().is_empty() && self.to.trim().is_empty() && self.transport.is_none()
    }

    pub fn matches(&self, ticket: &TicketDto) -> bool {
        contains_ignore_case(&ticket.from, &self.from)
            && contains_ignore_case(&ticket.to, &self.to)
            && self
                .transport
                .map_or(true, |transport| ticket.transport_type == transport)
    }

    pub fn apply(&self, tickets: &[TicketDto]) -> Vec<TicketDto> {
        tickets
            .iter()
            .filter(|ticket| self.matches(ticket))
            .cloned()
            .collect()
    }
}

/// A frequently travelled route shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopularRoute {
    pub from: &'static str,
    pub to: &'static str,
    pub transport: TransportType,
    pub passengers: &'static str,
}

impl PopularRoute {
    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter::route(self.from, self.to)
    }
}

pub const POPULAR_ROUTES: [PopularRoute; 6] = [
    PopularRoute { from: "Dhaka", to: "Chittagong", transport: TransportType::Bus, passengers: "2,450+" },
    PopularRoute { from: "Dhaka", to: "Sylhet", transport: TransportType::Train, passengers: "1,890+" },
    PopularRoute { from: "Dhaka", to: "Cox's Bazar", transport: TransportType::Bus, passengers: "3,120+" },
    PopularRoute { from: "Dhaka", to: "Khulna", transport: TransportType::Bus, passengers: "1,560+" },
    PopularRoute { from: "Chittagong", to: "Cox's Bazar", transport: TransportType::Bus, passengers: "2,780+" },
    PopularRoute { from: "Dhaka", to: "Rajshahi", transport: TransportType::Train, passengers: "1,340+" },
];

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// 1-based page cursor over a list of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    total_items: usize,
    page_size: usize,
}

impl Pagination {
    pub fn new(total_items: usize) -> Self {
        Self::with_page_size(total_items, PAGE_SIZE)
    }

    pub fn with_page_size(total_items: usize, page_size: usize) -> Self {
        Self {
            page: 1,
            total_items,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Move to `page`, returning whether the page changed. Out-of-range pages are ignored.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() || page == self.page {
            return false;
        }

        self.page = page;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.page + 1)
    }

    pub fn previous(&mut self) -> bool {
        self.page > 1 && self.go_to(self.page - 1)
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Update the item count, clamping the current page back into range.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        let last = self.total_pages().max(1);
        if self.page > last {
            self.page = last;
        }
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// All page numbers, for rendering the page buttons.
    pub fn page_numbers(&self) -> impl Iterator<Item = usize> {
        1..=self.total_pages()
    }
}

/// Catalog view state: filter, sort mode and page cursor together.
///
/// Changing the filter or the sort mode sends the viewer back to the first page.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    filter: CatalogFilter,
    sort: SortMode,
    pagination: Pagination,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self {
            filter: CatalogFilter::default(),
            sort: SortMode::Default,
            pagination: Pagination::new(0),
        }
    }
}

impl CatalogView {
    pub fn with_filter(filter: CatalogFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.pagination.reset();
    }

    pub fn set_filter(&mut self, filter: CatalogFilter) {
        self.filter = filter;
        self.pagination.reset();
    }

    pub fn go_to(&mut self, page: usize) -> bool {
        self.pagination.go_to(page)
    }

    /// Filter and sort `tickets`, sync the page cursor and return the visible list.
    pub fn arrange(&mut self, tickets: &[TicketDto]) -> Vec<TicketDto> {
        let filtered = self.filter.apply(tickets);
        let sorted = sort_tickets(&filtered, self.sort);
        self.pagination.set_total_items(sorted.len());
        sorted
    }

    pub fn visible(&mut self, tickets: &[TicketDto]) -> Vec<TicketDto> {
        let arranged = self.arrange(tickets);
        self.pagination.slice(&arranged).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::ticket::{SellerDto, TicketStatus};

    use super::*;

    fn ticket(id: &str, price: f64, from: &str, to: &str, transport: TransportType) -> TicketDto {
        TicketDto {
            id: id.to_string(),
            name: format!("Ticket {id}"),
            image: None,
            from: from.to_string(),
            to: to.to_string(),
            transport_type: transport,
            price,
            quantity: 10,
            departure_date: None,
            departure_time: None,
            perks: Vec::new(),
            status: TicketStatus::Approved,
            is_advertised: false,
            seller: SellerDto::default(),
        }
    }

    fn priced(prices: &[f64]) -> Vec<TicketDto> {
        prices
            .iter()
            .enumerate()
            .map(|(i, price)| ticket(&i.to_string(), *price, "Dhaka", "Sylhet", TransportType::Bus))
            .collect()
    }

    fn ids(tickets: &[TicketDto]) -> Vec<String> {
        tickets.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn default_sort_preserves_order() {
        let tickets = priced(&[30.0, 10.0, 20.0]);

        assert_eq!(ids(&sort_tickets(&tickets, SortMode::Default)), ids(&tickets));
    }

    #[test]
    fn low_to_high_is_non_decreasing_and_stable() {
        let tickets = priced(&[30.0, 10.0, 20.0, 10.0]);

        let sorted = sort_tickets(&tickets, SortMode::LowToHigh);

        assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));
        assert_eq!(ids(&sorted), vec!["1", "3", "2", "0"]);
    }

    #[test]
    fn high_to_low_is_non_increasing() {
        let tickets = priced(&[30.0, 10.0, 45.5, 20.0]);

        let sorted = sort_tickets(&tickets, SortMode::HighToLow);

        assert!(sorted.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn parses_select_values() {
        assert_eq!(SortMode::parse("low-to-high"), SortMode::LowToHigh);
        assert_eq!(SortMode::parse("high-to-low"), SortMode::HighToLow);
        assert_eq!(SortMode::parse("anything"), SortMode::Default);
    }

    #[test]
    fn pages_concatenate_to_the_full_list() {
        for total in [0_usize, 1, 5, 6, 7, 12, 13] {
            let items: Vec<usize> = (0..total).collect();
            let mut pagination = Pagination::new(total);

            assert_eq!(pagination.total_pages(), total.div_ceil(PAGE_SIZE));

            let mut joined = Vec::new();
            for page in pagination.page_numbers().collect::<Vec<_>>() {
                pagination.go_to(page);
                assert_eq!(pagination.page(), page);
                joined.extend_from_slice(pagination.slice(&items));
            }
            assert_eq!(joined, items);
        }
    }

    #[test]
    fn out_of_range_navigation_is_a_no_op() {
        let mut pagination = Pagination::new(13);

        assert!(!pagination.go_to(0));
        assert!(!pagination.go_to(4));
        assert_eq!(pagination.page(), 1);
        assert!(!pagination.previous());

        assert!(pagination.go_to(3));
        assert!(!pagination.next());
        assert_eq!(pagination.page(), 3);
    }

    #[test]
    fn empty_list_has_no_pages() {
        let mut pagination = Pagination::new(0);

        assert_eq!(pagination.total_pages(), 0);
        assert!(!pagination.go_to(1));
        assert!(pagination.slice::<u8>(&[]).is_empty());
    }

    #[test]
    fn changing_sort_resets_to_first_page() {
        let tickets = priced(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let mut view = CatalogView::default();
        view.arrange(&tickets);

        assert!(view.go_to(2));
        view.set_sort(SortMode::HighToLow);

        assert_eq!(view.pagination().page(), 1);
        let visible = view.visible(&tickets);
        assert_eq!(visible.len(), PAGE_SIZE);
        assert_eq!(visible[0].price, 8.0);
    }

    #[test]
    fn filter_matches_route_case_insensitively() {
        let tickets = vec![
            ticket("a", 10.0, "Dhaka", "Sylhet", TransportType::Bus),
            ticket("b", 10.0, "Dhaka", "Chittagong", TransportType::Train),
            ticket("c", 10.0, "Khulna", "Sylhet", TransportType::Train),
        ];

        let filter = CatalogFilter {
            from: "dhaka".to_string(),
            to: String::new(),
            transport: Some(TransportType::Train),
        };

        assert_eq!(ids(&filter.apply(&tickets)), vec!["b"]);
        assert_eq!(CatalogFilter::default().apply(&tickets).len(), 3);
    }

    #[test]
    fn changing_filter_resets_page_and_clamps() {
        let mut tickets = priced(&[1.0; 12]);
        tickets.push(ticket("x", 5.0, "Rajshahi", "Dhaka", TransportType::Boat));
        let mut view = CatalogView::default();
        view.arrange(&tickets);
        assert!(view.go_to(3));

        view.set_filter(CatalogFilter {
            from: "raj".to_string(),
            ..Default::default()
        });

        assert_eq!(view.pagination().page(), 1);
        assert_eq!(ids(&view.visible(&tickets)), vec!["x"]);
        assert_eq!(view.pagination().total_pages(), 1);
    }

    #[test]
    fn popular_route_filter_selects_only_that_route() {
        let tickets = vec![
            ticket("a", 10.0, "Dhaka", "Cox's Bazar", TransportType::Bus),
            ticket("b", 10.0, "Chittagong", "Cox's Bazar", TransportType::Bus),
            ticket("c", 10.0, "Dhaka", "Sylhet", TransportType::Train),
        ];
        let route = POPULAR_ROUTES[2];

        assert_eq!(route.to, "Cox's Bazar");
        assert_eq!(ids(&route.filter().apply(&tickets)), vec!["a"]);
    }
}
