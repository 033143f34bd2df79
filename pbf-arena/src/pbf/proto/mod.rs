pub mod fileformat;
pub mod osmformat;
