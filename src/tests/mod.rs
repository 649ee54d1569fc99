mod std_str;

macro_rules! add_basic_tests {
    ($test_name:ident, $type:ident) => {
        #[test]
        fn $test_name() {
            let zeros = crate::$type::default();
            let zeros_clone = zeros.clone();
            assert_eq!(zeros, zeros_clone);
        }
    };
}

add_basic_tests!(test_binary, Binary);
add_basic_tests!(test_address, Address);
add_basic_tests!(test_hash, Hash);
