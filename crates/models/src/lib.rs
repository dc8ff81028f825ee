pub mod errors;
pub mod db;
pub mod company;

#[cfg(test)]
mod tests;
