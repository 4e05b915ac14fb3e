//! # WhatsApp Deep Link
//!
//! ```text
//! destination "+964 770 123 4567" ──► digits only ──► 9647701234567
//! message     "hello world"       ──► percent-encode ──► hello%20world
//!
//!             https://wa.me/9647701234567?text=hello%20world
//! ```
//!
//! Building a link never fails. An empty destination or message still yields
//! a syntactically valid URI; whether WhatsApp accepts it is not our concern.

/// Host and path prefix of every link.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Removes every non-digit character from a phone number.
pub fn clean_destination(destination: &str) -> String {
    destination.chars().filter(char::is_ascii_digit).collect()
}

/// Builds `https://wa.me/<digits>?text=<encoded message>`.
///
/// The message is UTF-8 percent-encoded as a URI component, so Arabic text,
/// emoji and newlines survive the round trip.
///
/// ## Example
/// ```rust
/// use gharim_core::deep_link::build_whatsapp_link;
///
/// assert_eq!(
///     build_whatsapp_link("+964 770 123 4567", "hello world"),
///     "https://wa.me/9647701234567?text=hello%20world"
/// );
/// ```
pub fn build_whatsapp_link(destination: &str, message: &str) -> String {
    format!(
        "{}{}?text={}",
        WHATSAPP_BASE_URL,
        clean_destination(destination),
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_destination_and_encodes_message() {
        assert_eq!(
            build_whatsapp_link("+964 770 123 4567", "hello world"),
            "https://wa.me/9647701234567?text=hello%20world"
        );
    }

    #[test]
    fn test_clean_destination() {
        assert_eq!(clean_destination("+964 (770) 123-4567"), "9647701234567");
        assert_eq!(clean_destination("abc"), "");
        assert_eq!(clean_destination("٠٧٧٠"), "");
    }

    #[test]
    fn test_empty_inputs_still_give_a_link() {
        assert_eq!(build_whatsapp_link("", ""), "https://wa.me/?text=");
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let link = build_whatsapp_link("964", "a&b=c?d#e\n*");
        assert_eq!(link, "https://wa.me/964?text=a%26b%3Dc%3Fd%23e%0A%2A");
    }

    #[test]
    fn test_unicode_message_decodes_back() {
        let message = "🛍️ *طلب جديد*\nالمجموع: ‏١٠٬٠٠٠ د.ع.‏";
        let link = build_whatsapp_link("9647701234567", message);

        let (_, encoded) = link.split_once("?text=").unwrap();
        assert!(encoded.is_ascii());
        assert_eq!(urlencoding::decode(encoded).unwrap(), message);
    }
}
