mod dictionary;
mod masked_token;
mod ranked_match;

pub use dictionary::Dictionary;
pub use masked_token::MaskedToken;
pub use ranked_match::RankedMatch;
