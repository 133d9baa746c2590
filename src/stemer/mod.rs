pub mod porter_algorithm;
