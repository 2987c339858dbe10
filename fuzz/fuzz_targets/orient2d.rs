#![no_main]

use libfuzzer_sys::fuzz_target;
use nalgebra::Matrix2x3;
use num_rational::BigRational;
use num_traits::Zero;

fuzz_target!(|data: [(f64, f64); 3]| {
    let points = Matrix2x3::from_fn(|r, c| if r == 0 { data[c].0 } else { data[c].1 });
    let result = robust_nd::orientation(&points);

    match robust_nd::exact::orientation(&points) {
        Ok(exact) => {
            assert!(result.is_finite());
            assert_eq!(result.partial_cmp(&0.0), Some(exact.cmp(&BigRational::zero())));
        }
        Err(_) => assert!(result.is_nan()),
    }
});
