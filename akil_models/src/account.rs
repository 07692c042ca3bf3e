use std::sync::LazyLock;

use regex::Regex;

use crate::macros::nutype_string;

nutype_string!(UserName(sanitize(trim), validate(len_char_min = 1, len_char_max = 64)));

nutype_string!(UserPassword(validate(
    len_char_min = 1,
    len_char_max = UserPassword::MAX_LENGTH
)));
impl UserPassword {
    pub const MAX_LENGTH: usize = 4096;
}

// Free-form account role; uppercased on the wire by the identity client.
nutype_string!(SignupRole(sanitize(trim), validate(len_char_min = 1, len_char_max = 32)));

pub static VERIFICATION_OTP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{4}$").unwrap());

// The 4-digit code sent to a new account's email address.
nutype_string!(VerificationOtp(
    sanitize(trim),
    validate(regex = VERIFICATION_OTP_REGEX)
));
