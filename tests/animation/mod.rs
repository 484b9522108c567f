pub mod decrypt_tests;
