use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaFacebook, FaGithub, FaTwitter};
use dioxus_free_icons::Icon;

use crate::client::{components::navbar::BrandLink, router::Route};

#[component]
pub fn Footer() -> Element {
    rsx!(
        footer { class: "footer sm:footer-horizontal bg-base-200 text-base-content p-10",
            aside { class: "max-w-xs",
                BrandLink {}
                p { "Book bus, train, launch and flight tickets easily." }
            }
            nav {
                h6 { class: "footer-title", "Quick Links" }
                Link { to: Route::Home {}, class: "link link-hover", "Home" }
                Link { to: Route::catalog(), class: "link link-hover", "All Tickets" }
                Link { to: Route::About {}, class: "link link-hover", "About" }
            }
            nav {
                h6 { class: "footer-title", "Contact" }
                p { "support@ticketmaster.example" }
                div { class: "flex gap-3 mt-2",
                    Icon { width: 20, height: 20, icon: FaFacebook }
                    Icon { width: 20, height: 20, icon: FaTwitter }
                    Icon { width: 20, height: 20, icon: FaGithub }
                }
            }
        }
    )
}
