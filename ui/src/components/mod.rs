mod contact_card;
pub use contact_card::ContactCard;

pub mod icons;

mod lightbox;
pub use lightbox::LightboxOverlay;

mod locale_toggle;
pub use locale_toggle::LocaleToggle;

mod option_gallery;
pub use option_gallery::OptionGallery;
