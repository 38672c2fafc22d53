use super::record_file::{AnswerEntry, RecordEntry};
use fancy_regex::Regex;
use pipe_backend_application::ports::ResolutionRule;
use pipe_backend_domain::{Answer, PipeRequest, QueryType, RecordKind, RuleError};
use tracing::debug;

#[derive(Debug)]
enum NameMatcher {
    Exact(Vec<String>),
    Suffix(String),
    Pattern(Regex),
}

impl NameMatcher {
    fn from_entry(entry: &RecordEntry) -> Result<(String, Self), String> {
        let mut exact: Vec<String> = entry.name.iter().chain(&entry.names).cloned().collect();

        let selectors = [
            !exact.is_empty(),
            entry.suffix.is_some(),
            entry.pattern.is_some(),
        ];
        match selectors.iter().filter(|set| **set).count() {
            1 => {}
            0 => return Err("record needs one of name, names, suffix or pattern".to_string()),
            _ => {
                return Err(
                    "record may only use one of name/names, suffix or pattern".to_string(),
                )
            }
        }

        if let Some(suffix) = &entry.suffix {
            let suffix = normalize(suffix);
            return Ok((format!("*{}", suffix), NameMatcher::Suffix(suffix)));
        }

        if let Some(pattern) = &entry.pattern {
            let regex = Regex::new(pattern)
                .map_err(|e| format!("invalid pattern '{}': {}", pattern, e))?;
            return Ok((pattern.clone(), NameMatcher::Pattern(regex)));
        }

        let label = exact.join(",");
        exact.iter_mut().for_each(|name| *name = normalize(name));
        Ok((label, NameMatcher::Exact(exact)))
    }

    fn matches(&self, qname: &str) -> bool {
        let qname = normalize(qname);
        match self {
            NameMatcher::Exact(names) => names.iter().any(|name| *name == qname),
            NameMatcher::Suffix(suffix) => qname.ends_with(suffix.as_str()),
            NameMatcher::Pattern(regex) => match regex.is_match(&qname) {
                Ok(matched) => matched,
                Err(e) => {
                    debug!(qname = %qname, error = %e, "Pattern evaluation failed");
                    false
                }
            },
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

#[derive(Debug)]
struct AnswerTemplate {
    qtype: QueryType,
    content: String,
    ttl: Option<u32>,
}

impl AnswerTemplate {
    /// ANY takes every answer; a CNAME answers whatever type was asked.
    fn answers(&self, request: &PipeRequest) -> bool {
        request.is_any() || self.qtype == request.qtype || self.qtype == QueryType::CNAME
    }
}

impl From<&AnswerEntry> for AnswerTemplate {
    fn from(entry: &AnswerEntry) -> Self {
        Self {
            qtype: QueryType::from(entry.qtype.as_str()),
            content: entry.content.clone(),
            ttl: entry.ttl,
        }
    }
}

/// Rule defined by one `[[record]]` entry of a record file.
#[derive(Debug)]
pub struct TemplateRule {
    name: String,
    kind: RecordKind,
    matcher: NameMatcher,
    ttl: u32,
    shuffle: bool,
    answers: Vec<AnswerTemplate>,
}

impl TemplateRule {
    pub fn compile(entry: &RecordEntry) -> Result<Self, String> {
        let (name, matcher) = NameMatcher::from_entry(entry)?;

        Ok(Self {
            name,
            kind: entry.kind,
            matcher,
            ttl: entry.ttl,
            shuffle: entry.shuffle,
            answers: entry.answers.iter().map(AnswerTemplate::from).collect(),
        })
    }
}

impl ResolutionRule for TemplateRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RecordKind {
        self.kind
    }

    fn matches(&self, request: &PipeRequest) -> bool {
        self.matcher.matches(&request.qname)
    }

    fn answer(&self, request: &PipeRequest) -> Result<Answer, RuleError> {
        if self.answers.is_empty() {
            return Err(RuleError::NotFound);
        }

        let mut answer = Answer::for_request(request)
            .ttl(self.ttl)
            .shuffle(self.shuffle);

        for template in self.answers.iter().filter(|t| t.answers(request)) {
            let content = render(&template.content, request)?;
            answer = match template.ttl {
                Some(ttl) => answer.record_with_ttl(template.qtype.clone(), content, ttl),
                None => answer.record(template.qtype.clone(), content),
            };
        }

        Ok(answer)
    }
}

/// Expands `{qname}`-style placeholders; `{{` yields a literal brace.
fn render(template: &str, request: &PipeRequest) -> Result<String, RuleError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start].replace("}}", "}"));
        let after = &rest[start + 1..];

        if let Some(stripped) = after.strip_prefix('{') {
            out.push('{');
            rest = stripped;
            continue;
        }

        let end = after.find('}').ok_or_else(|| {
            RuleError::Failed(format!("unterminated placeholder in '{}'", template))
        })?;

        let value = match &after[..end] {
            "qname" => &*request.qname,
            "qclass" => request.qclass.as_str(),
            "qtype" => request.qtype.as_str(),
            "id" => &*request.id,
            "remoteip" => &*request.remote_ip,
            "localip" => &*request.local_ip,
            other => {
                return Err(RuleError::Failed(format!(
                    "unknown placeholder {{{}}}",
                    other
                )))
            }
        };

        out.push_str(value);
        rest = &after[end + 1..];
    }

    out.push_str(&rest.replace("}}", "}"));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipe_backend_domain::QueryClass;

    fn request() -> PipeRequest {
        PipeRequest::new(
            "www.my.net",
            QueryClass::IN,
            QueryType::TXT,
            "7",
            "10.0.0.1",
            "10.0.0.2",
        )
    }

    #[test]
    fn test_render_substitutes_request_fields() {
        let rendered = render("\"{qname} asked by {remoteip} via {localip}\"", &request()).unwrap();
        assert_eq!(rendered, "\"www.my.net asked by 10.0.0.1 via 10.0.0.2\"");
    }

    #[test]
    fn test_render_literal_braces() {
        assert_eq!(render("{{x}}", &request()).unwrap(), "{x}");
    }

    #[test]
    fn test_render_unknown_placeholder_fails() {
        let result = render("{nope}", &request());
        assert!(matches!(result, Err(RuleError::Failed(msg)) if msg.contains("nope")));
    }

    #[test]
    fn test_render_unterminated_placeholder_fails() {
        assert!(render("{qname", &request()).is_err());
    }

    fn rule(answers: &str) -> TemplateRule {
        let toml = format!("[[record]]\nname = \"www.my.net\"\nanswers = {}\n", answers);
        let file = crate::records::RecordFile::parse(&toml).unwrap();
        TemplateRule::compile(&file.records[0]).unwrap()
    }

    fn answered_types(rule: &TemplateRule, qtype: QueryType) -> Vec<String> {
        let request = PipeRequest::new("www.my.net", QueryClass::IN, qtype, "1", "10.0.0.1", "10.0.0.2");
        rule.answer(&request)
            .unwrap()
            .records()
            .iter()
            .map(|record| record.qtype.to_string())
            .collect()
    }

    #[test]
    fn test_answers_filtered_by_requested_type() {
        let rule = rule(r#"[{ type = "A", content = "1.2.3.4" }, { type = "TXT", content = "x" }]"#);

        assert_eq!(answered_types(&rule, QueryType::A), vec!["A"]);
        assert_eq!(answered_types(&rule, QueryType::TXT), vec!["TXT"]);
        assert_eq!(answered_types(&rule, QueryType::ANY), vec!["A", "TXT"]);
        assert!(answered_types(&rule, QueryType::AAAA).is_empty());
    }

    #[test]
    fn test_cname_answers_any_type() {
        let rule = rule(r#"[{ type = "CNAME", content = "web.my.net" }]"#);
        assert_eq!(answered_types(&rule, QueryType::AAAA), vec!["CNAME"]);
    }

    #[test]
    fn test_normalize_strips_root_dot() {
        assert_eq!(normalize("WWW.My.Net."), "www.my.net");
    }
}
