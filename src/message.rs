use mail_parser::{HeaderName, Message, MessageParser};

/// Snapshot of the message fields the detectors read. Built once per
/// analysis; detectors borrow it and never hold onto message content.
#[derive(Debug, Default, Clone)]
pub struct MailContext {
    pub subject: Option<String>,
    pub from_header: Option<String>,
    pub authentication_results: Option<String>,
    pub received: Vec<String>,
    pub body: Option<String>,
}

impl MailContext {
    /// Parse raw message bytes. Returns None when the bytes are not a
    /// recognizable message at all; partial messages still produce a context
    /// with the fields that could be read.
    pub fn parse(raw: &[u8]) -> Option<Self> {
        MessageParser::default()
            .parse(raw)
            .map(|msg| Self::from_message(&msg))
    }

    pub fn from_message(message: &Message) -> Self {
        let mut received = Vec::new();
        for header in message.headers() {
            if let HeaderName::Received = &header.name {
                let raw = message
                    .raw_message
                    .get(header.offset_start..header.offset_end)
                    .unwrap_or_default();
                received.push(String::from_utf8_lossy(raw).trim().to_string());
            }
        }

        MailContext {
            subject: message.subject().map(|s| s.to_string()),
            from_header: message
                .header_raw("From")
                .map(|s| s.trim().to_string()),
            authentication_results: message
                .header_raw("Authentication-Results")
                .map(|s| s.trim().to_string()),
            received,
            body: message.body_text(0).map(|s| s.trim().to_string()),
        }
    }

    /// First text/plain body, or empty when none exists or decoding failed.
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    pub fn subject_text(&self) -> &str {
        self.subject.as_deref().unwrap_or("")
    }

    pub fn from_text(&self) -> &str {
        self.from_header.as_deref().unwrap_or("")
    }

    pub fn authentication_results_text(&self) -> &str {
        self.authentication_results.as_deref().unwrap_or("")
    }

    pub fn received_count(&self) -> usize {
        self.received.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Received: from relay1.example.net (relay1.example.net [10.0.0.1])\r\n\
        \tby mx.example.org with ESMTP id abc123\r\n\
        Received: from client.example.net (client.example.net [10.0.0.2])\r\n\
        \tby relay1.example.net with ESMTP id def456\r\n\
        Authentication-Results: mx.example.org; spf=pass smtp.mailfrom=example.net\r\n\
        From: Alice <alice@example.net>\r\n\
        Subject: Quarterly report\r\n\
        Content-Type: text/plain; charset=utf-8\r\n\
        \r\n\
        Report attached.\r\n";

    #[test]
    fn test_parse_plain_message() {
        let ctx = MailContext::parse(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ctx.subject_text(), "Quarterly report");
        assert_eq!(ctx.from_text(), "Alice <alice@example.net>");
        assert_eq!(ctx.received_count(), 2);
        assert!(ctx.authentication_results_text().contains("spf=pass"));
        assert_eq!(ctx.body_text(), "Report attached.");
    }

    #[test]
    fn test_parse_multipart_prefers_plain_text() {
        let raw = "From: a@example.com\r\n\
            Subject: multipart\r\n\
            MIME-Version: 1.0\r\n\
            Content-Type: multipart/alternative; boundary=\"sep\"\r\n\
            \r\n\
            --sep\r\n\
            Content-Type: text/plain; charset=utf-8\r\n\
            \r\n\
            plain part\r\n\
            --sep\r\n\
            Content-Type: text/html; charset=utf-8\r\n\
            \r\n\
            <p>html part</p>\r\n\
            --sep--\r\n";
        let ctx = MailContext::parse(raw.as_bytes()).unwrap();
        assert_eq!(ctx.body_text(), "plain part");
    }

    #[test]
    fn test_missing_headers_degrade_to_empty() {
        let ctx = MailContext::parse(b"\r\njust a body\r\n").unwrap_or_default();
        assert_eq!(ctx.subject_text(), "");
        assert_eq!(ctx.from_text(), "");
        assert_eq!(ctx.authentication_results_text(), "");
        assert_eq!(ctx.received_count(), 0);
    }
}
