/// Decomposition of a host into its registrable domain and public-suffix
/// tail, e.g. `mail.example.co.uk` -> domain `example`, suffix `co.uk`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    pub domain: String,
    pub suffix: String,
}

impl DomainParts {
    pub fn empty() -> Self {
        DomainParts {
            domain: String::new(),
            suffix: String::new(),
        }
    }

    /// The registrable name as a single string: `domain.suffix`, or just the
    /// domain when no suffix was recognized.
    pub fn registrable(&self) -> String {
        if self.suffix.is_empty() {
            self.domain.clone()
        } else {
            format!("{}.{}", self.domain, self.suffix)
        }
    }
}

/// Splits hosts against a swappable list of multi-label public suffixes.
/// Not a full public-suffix-list implementation; covers the common
/// country-code second-level registrations.
pub struct DomainParser {
    multi_label_suffixes: Vec<String>,
}

impl Default for DomainParser {
    fn default() -> Self {
        DomainParser {
            multi_label_suffixes: [
                "co.uk", "org.uk", "ac.uk", "gov.uk", "me.uk", "co.jp", "ne.jp", "or.jp",
                "com.au", "net.au", "org.au", "co.nz", "com.br", "com.cn", "com.mx",
                "co.za", "co.in", "com.sg", "com.tr",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl DomainParser {
    pub fn new(multi_label_suffixes: Vec<String>) -> Self {
        DomainParser {
            multi_label_suffixes,
        }
    }

    /// Split a host into registrable domain + suffix. A bare label has no
    /// suffix; an empty host yields empty parts.
    pub fn parse(&self, host: &str) -> DomainParts {
        let host = host.trim_matches('.').to_lowercase();
        if host.is_empty() {
            return DomainParts::empty();
        }

        let labels: Vec<&str> = host.split('.').collect();
        if labels.len() == 1 {
            return DomainParts {
                domain: labels[0].to_string(),
                suffix: String::new(),
            };
        }

        // Prefer a known two-label suffix (co.uk style) over the last label
        if labels.len() >= 3 {
            let tail = format!("{}.{}", labels[labels.len() - 2], labels[labels.len() - 1]);
            if self.multi_label_suffixes.iter().any(|s| *s == tail) {
                return DomainParts {
                    domain: labels[labels.len() - 3].to_string(),
                    suffix: tail,
                };
            }
        }

        DomainParts {
            domain: labels[labels.len() - 2].to_string(),
            suffix: labels[labels.len() - 1].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_host() {
        let parser = DomainParser::default();
        let parts = parser.parse("example.com");
        assert_eq!(parts.domain, "example");
        assert_eq!(parts.suffix, "com");
        assert_eq!(parts.registrable(), "example.com");
    }

    #[test]
    fn test_parse_subdomain() {
        let parser = DomainParser::default();
        let parts = parser.parse("mail.login.example.com");
        assert_eq!(parts.domain, "example");
        assert_eq!(parts.suffix, "com");
    }

    #[test]
    fn test_parse_multi_label_suffix() {
        let parser = DomainParser::default();
        let parts = parser.parse("mail.example.co.uk");
        assert_eq!(parts.domain, "example");
        assert_eq!(parts.suffix, "co.uk");
        assert_eq!(parts.registrable(), "example.co.uk");
    }

    #[test]
    fn test_parse_bare_label() {
        let parser = DomainParser::default();
        let parts = parser.parse("localhost");
        assert_eq!(parts.domain, "localhost");
        assert_eq!(parts.suffix, "");
        assert_eq!(parts.registrable(), "localhost");
    }

    #[test]
    fn test_parse_empty_host() {
        let parser = DomainParser::default();
        assert_eq!(parser.parse(""), DomainParts::empty());
        assert_eq!(parser.parse("."), DomainParts::empty());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let parser = DomainParser::default();
        let parts = parser.parse("Mail.EXAMPLE.Co.UK");
        assert_eq!(parts.registrable(), "example.co.uk");
    }

    #[test]
    fn test_swapped_suffix_list() {
        let parser = DomainParser::new(vec!["co.test".to_string()]);
        let parts = parser.parse("a.b.co.test");
        assert_eq!(parts.domain, "b");
        assert_eq!(parts.suffix, "co.test");
        // co.uk is no longer recognized as a unit
        let parts = parser.parse("example.co.uk");
        assert_eq!(parts.domain, "co");
        assert_eq!(parts.suffix, "uk");
    }
}
