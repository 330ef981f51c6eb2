pub mod catch;
pub mod damage;
