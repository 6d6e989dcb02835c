// Landing page sections
// Developed by BroaddCast Business Solutions LLP (c)2025

/// Dealer phone number shown in the nav and footer (single source of truth).
pub const DEALER_PHONE: &str = "7733888999";

/// Showroom address printed in the footer.
pub const DEALER_ADDRESS: &str = "#3,4,5,6 survey no 58/1, Gowliddodi, Gopanpally, \
Financial district, Gachibowli-500075";

mod carousel;
mod features;
mod footer;
mod hero;
mod lead_form;
mod nav;
mod offers;
mod showcase;

pub use features::FeaturesCarousel;
pub use footer::Footer;
pub use hero::Hero;
pub use lead_form::LeadCaptureSection;
pub use nav::Nav;
pub use offers::OffersCarousel;
pub use showcase::ColorShowcase;
