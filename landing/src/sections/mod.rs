// Landing page sections, top to bottom.

mod about;
mod collections;
mod cta;
mod footer;
mod hero;
mod subscribe;

pub use about::About;
pub use collections::{CollectionCard, Collections};
pub use cta::CallToAction;
pub use footer::Footer;
pub use hero::Hero;
pub use subscribe::{ExpireCallback, SubscribeSection, submit_and_schedule};
