pub mod avatar;
pub mod icons;
pub mod logo;
pub mod modal;
pub mod navigation;
