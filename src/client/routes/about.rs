use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::{Page, SectionTitle};

#[component]
pub fn About() -> Element {
    rsx!(
        Title { "TicketMaster | About" }
        Page { class: "flex flex-col items-center",
            SectionTitle {
                title: "About TicketMaster",
                subtitle: "A marketplace connecting travellers with transport operators.",
            }
            div { class: "max-w-3xl flex flex-col gap-4",
                p {
                    "Sellers list bus, train, launch and flight tickets. Every listing is reviewed by an administrator before it becomes visible to customers."
                }
                p {
                    "Customers book seats, wait for the seller to approve the booking, then pay through a secure hosted checkout. Approved bookings can be paid from the dashboard until the departure time."
                }
                ul { class: "list-disc pl-6",
                    li { "Customers: browse, book and pay for tickets" }
                    li { "Sellers: list tickets and review booking requests" }
                    li { "Administrators: review tickets, manage users and feature offers" }
                }
            }
        }
    )
}
