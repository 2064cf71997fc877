pub mod proptest_ledger;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::error::SurveyAirdropError;

pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: SurveyAirdropError) {
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            u32::from(expected),
            "expected {:?}, got {}",
            expected,
            err.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
