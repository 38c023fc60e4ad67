/// Archive files are always the 320 kbps encode.
pub const ARCHIVE_BITRATE: &str = "320kbps";

/// Lower camel case a show name: "Raise The Dead" becomes "raiseTheDead".
///
/// Splits on whitespace, lower-cases the first word and title-cases the rest.
/// Empty or all-whitespace input yields an empty string.
pub fn to_lower_camel_case(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut out = first.to_lowercase();
    for word in words {
        out.push_str(&title_case_word(word));
    }
    out
}

/// Title case every word of a name, keeping single spaces between words.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-case each letter that follows a non-letter, lower-case the rest.
/// "dj-set" becomes "Dj-Set", "5am" becomes "5Am".
fn title_case_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_alpha = false;
    for c in word.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

/// Build the direct download URL for one archived show.
///
/// `host` is the archive's address as it should appear in the URL authority,
/// normally a bare IPv4 address.
pub fn build_download_url(date: &str, show_id: &str, host: &str) -> String {
    format!("http://{host}/archives/{date}_{show_id}_{ARCHIVE_BITRATE}.mp3")
}
