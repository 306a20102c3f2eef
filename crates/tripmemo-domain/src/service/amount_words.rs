//! Rupee amounts rendered as English words, Indian grouping
//! (thousand / lakh / crore).

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Render a whole rupee amount in words.
///
/// No currency suffix is added; the memo and invoice documents append
/// "Rupees Only" themselves.
pub fn amount_in_words(amount: u64) -> String {
    if amount == 0 {
        return "Zero".to_string();
    }
    let mut parts: Vec<String> = Vec::new();

    let crore = amount / 10_000_000;
    let rest = amount % 10_000_000;
    if crore > 0 {
        // Crores recurse so amounts beyond 99 crore group again
        parts.push(format!("{} Crore", amount_in_words(crore)));
    }

    let lakh = rest / 100_000;
    if lakh > 0 {
        parts.push(format!("{} Lakh", under_hundred(lakh)));
    }

    let thousand = (rest % 100_000) / 1_000;
    if thousand > 0 {
        parts.push(format!("{} Thousand", under_hundred(thousand)));
    }

    let hundred = (rest % 1_000) / 100;
    if hundred > 0 {
        parts.push(format!("{} Hundred", ONES[hundred as usize]));
    }

    let tail = rest % 100;
    if tail > 0 {
        parts.push(under_hundred(tail));
    }

    parts.join(" ")
}

fn under_hundred(n: u64) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        ONES[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
    }
}
