pub mod booking_modal;
pub mod chart;
pub mod countdown;
pub mod dashboard;
pub mod footer;
pub mod loading;
pub mod modal;
pub mod navbar;
pub mod page;
pub mod payment_modal;
pub mod status_badge;
pub mod ticket_card;
pub mod toast;

pub use booking_modal::BookingModal;
pub use chart::{BarChart, StatCard};
pub use countdown::Countdown;
pub use footer::Footer;
pub use loading::{EmptyState, ErrorMessage, Loading};
pub use modal::{ConfirmModal, Modal};
pub use navbar::{Navbar, ThemeToggle};
pub use page::{Page, SectionTitle};
pub use payment_modal::PaymentModal;
pub use status_badge::{OrderStatusBadge, TicketStatusBadge};
pub use ticket_card::TicketCard;
pub use toast::ToastHost;
