pub mod test_convert;
