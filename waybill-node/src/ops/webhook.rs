//! Webhook subscription operation handlers.

use super::{deleted, single_page_pagination};
use crate::dispatch::WebhookOp;
use crate::error::NodeError;
use crate::host::ParameterResolver;
use crate::run::OperationOutput;
use waybill_client::ShippoClient;
use waybill_core::fields;
use waybill_core::types::{WebhookCreate, WebhookUpdate};

pub(crate) async fn run(
    client: &ShippoClient,
    params: &dyn ParameterResolver,
    op: WebhookOp,
    index: usize,
) -> Result<OperationOutput, NodeError> {
    match op {
        WebhookOp::Create => {
            let options = params.object_param("options", index);
            let webhook = WebhookCreate {
                url: params.required_string("url", index)?,
                event: params.required_string("event", index)?,
                is_test: fields::bool_field(&options, "isTest"),
            };
            Ok(OperationOutput::Single(
                client.create_webhook(&webhook).await?,
            ))
        }
        WebhookOp::Get => {
            let webhook_id = params.required_string("webhookId", index)?;
            Ok(OperationOutput::Single(
                client.get_webhook(&webhook_id).await?,
            ))
        }
        WebhookOp::GetAll => Ok(OperationOutput::Many(
            client
                .list_webhooks(single_page_pagination(params, index))
                .await?,
        )),
        WebhookOp::Update => {
            let webhook_id = params.required_string("webhookId", index)?;
            let update_fields = params.object_param("updateFields", index);
            let update = WebhookUpdate {
                url: fields::string_field(&update_fields, "url"),
                event: fields::string_field(&update_fields, "event"),
                is_test: fields::bool_field(&update_fields, "isTest"),
            };
            Ok(OperationOutput::Single(
                client.update_webhook(&webhook_id, &update).await?,
            ))
        }
        WebhookOp::Delete => {
            let webhook_id = params.required_string("webhookId", index)?;
            client.delete_webhook(&webhook_id).await?;
            Ok(OperationOutput::Single(deleted(webhook_id)))
        }
    }
}
