mod filter_tests;
