use pipe_backend_application::services::ResolverRegistry;
use pipe_backend_domain::{PipeRequest, QueryClass, QueryType};

const TESTER_LOCAL_IP: &str = "127.0.0.1";
const TESTER_QUERY_ID: &str = "1";

/// Resolves one name against the loaded records and renders what the
/// session would send for it, or the error that stopped it.
pub fn render_lookup(
    registry: &ResolverRegistry,
    record: &str,
    qtype: &str,
    remote_ip: &str,
) -> String {
    let qtype = QueryType::from(qtype);
    let request = PipeRequest::new(
        record,
        QueryClass::IN,
        qtype.clone(),
        TESTER_QUERY_ID,
        remote_ip,
        TESTER_LOCAL_IP,
    );

    let mut out = format!("\nResponse for {} query on {} from {}\n\n", qtype, record, remote_ip);
    match registry.resolve(&request) {
        Ok(answer) => {
            for line in answer.response() {
                out.push_str(&line);
                out.push('\n');
            }
        }
        Err(e) => {
            out.push_str(&e.to_string());
            out.push('\n');
        }
    }
    out
}
