use lotto_core::prize::PrizeTier;

/// `1500000` becomes `1,500,000`.
pub fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn tier_name(tier: PrizeTier) -> &'static str {
    match tier {
        PrizeTier::First => "1st",
        PrizeTier::Second => "2nd",
        PrizeTier::Third => "3rd",
        PrizeTier::Fourth => "4th",
        PrizeTier::Fifth => "5th",
        PrizeTier::Miss => "none",
    }
}
