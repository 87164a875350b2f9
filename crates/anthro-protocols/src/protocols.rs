pub mod durnin_womersley;
pub mod faulkner;
pub mod guedes;
pub mod isak;
pub mod jackson_pollock_3;
pub mod jackson_pollock_7;
