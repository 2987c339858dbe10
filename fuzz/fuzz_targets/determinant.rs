#![no_main]

use libfuzzer_sys::fuzz_target;
use nalgebra::Matrix3;
use num_rational::BigRational;
use num_traits::Zero;

fuzz_target!(|data: [f64; 9]| {
    let matrix = Matrix3::from_row_slice(&data);
    let result = robust_nd::determinant(&matrix);

    match robust_nd::exact::determinant(&matrix) {
        Ok(exact) => {
            assert!(result.is_finite());
            assert_eq!(result.partial_cmp(&0.0), Some(exact.cmp(&BigRational::zero())));
        }
        Err(_) => assert!(result.is_nan()),
    }
});
