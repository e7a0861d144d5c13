pub mod client;
pub mod elpriset_just_nu;
pub mod price_provider;
