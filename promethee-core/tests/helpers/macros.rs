// See https://stackoverflow.com/questions/34662713/how-can-i-create-parameterized-tests-in-rust
macro_rules! with_dollar_sign {
    ($($body:tt)*) => {
        macro_rules! __with_dollar_sign { $($body)* }
        __with_dollar_sign!($);
    }
}

#[macro_export]
macro_rules! parameterized_test {
    ($name:ident, $args:pat, $body:tt) => {
        with_dollar_sign! {
        ($d:tt) => {
            macro_rules! $name {
                ($d($d pname:ident: $d values:expr,)*) => {
                    mod $name {
                        use super::*;
                        $d(
                            #[test]
                            fn $d pname() {
                                let $args = $d values;
                                $body
                            }
                        )*
                    }}}}}
    };
}

#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr) => {{
        let (left, right): (f64, f64) = ($left, $right);
        if (left - right).abs() > 1E-6 {
            panic!("assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`", left, right)
        }
    }};
}

#[macro_export]
macro_rules! assert_all_close {
    ($left:expr, $right:expr) => {{
        let (left, right): (Vec<f64>, Vec<f64>) = ($left, $right);
        let is_same = left.len() == right.len() && left.iter().zip(right.iter()).all(|(l, r)| (l - r).abs() <= 1E-6);
        if !is_same {
            panic!("assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`", left, right)
        }
    }};
}
