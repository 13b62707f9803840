use crate::dns::record_map::{
    response_header, to_custom_query, to_hickory_record, unanswered_response_code,
};
use custom_dns_application::use_cases::ResolveQueryUseCase;
use custom_dns_domain::config::UnansweredRcode;
use hickory_proto::op::{MessageType, OpCode, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Authoritative front end for the custom record set.
pub struct DnsServerHandler {
    use_case: Arc<ResolveQueryUseCase>,
    unanswered_rcode: ResponseCode,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>, unanswered_rcode: UnansweredRcode) -> Self {
        Self {
            use_case,
            unanswered_rcode: unanswered_response_code(unanswered_rcode),
        }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let header = request.header();
        if header.message_type() != MessageType::Query || header.op_code() != OpCode::Query {
            warn!(op_code = ?header.op_code(), "Unsupported DNS operation");
            return send_error_response(request, &mut response_handle, ResponseCode::NotImp, false)
                .await;
        }

        let query = to_custom_query(
            header.id(),
            request.queries().iter().map(|q| q.original()),
        );
        let client_ip = request.src().ip();

        debug!(
            client = %client_ip,
            questions = query.questions.len(),
            "DNS query received"
        );

        let Some(response) = self.use_case.execute(&query).await else {
            return send_error_response(request, &mut response_handle, self.unanswered_rcode, true)
                .await;
        };

        let answers = match response
            .answers
            .iter()
            .map(to_hickory_record)
            .collect::<Result<Vec<Record>, _>>()
        {
            Ok(answers) => answers,
            Err(e) => {
                error!(error = %e, name = %response.question.name, "Failed to encode answers");
                return send_error_response(
                    request,
                    &mut response_handle,
                    ResponseCode::ServFail,
                    false,
                )
                .await;
            }
        };

        debug!(
            name = %response.question.name,
            answers = answers.len(),
            "Sending response"
        );

        let builder = MessageResponseBuilder::from_message_request(request);
        let header = response_header(request.header(), ResponseCode::NoError, true);
        let message = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(message).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
    authoritative: bool,
) -> ResponseInfo {
    debug!(code = ?code, authoritative, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let header = response_header(request.header(), code, authoritative);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
