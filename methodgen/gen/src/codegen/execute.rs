//! Generation of the `execute()` routine.
//!
//! The response body is decoded into a local `Response` struct that
//! flattens the runtime's `ResponseEnvelope` and adds the payload:
//!
//! - named response field: `payload` is renamed to that field
//! - no response field but a return type: the payload is flattened too, so
//!   it is decoded from the remaining envelope fields
//! - no return type: the envelope is decoded on its own and `()` returned

use methodgen_define::Endpoint;
use proc_macro2::TokenStream;
use quote::quote;

use super::CodegenContext;
use super::arguments::parse_type;
use crate::errors::GeneratorError;

/// Generates `execute()` for `endpoint`.
///
/// ## Errors
///
/// Returns `GeneratorError::InvalidType` if the return type does not parse.
pub fn generate_execute_fn(
    ctx: &CodegenContext,
    endpoint: &Endpoint,
) -> Result<TokenStream, GeneratorError> {
    let runtime = &ctx.runtime;
    let name = endpoint.name.as_str();
    let docs = [
        format!(" Posts the call to `{}` and decodes the response.", name),
        String::new(),
        " ## Errors".to_string(),
        String::new(),
        " Returns `MethodError::Post` if the request fails or is cancelled, and".to_string(),
        " `MethodError::Remote` with the remote error string if the response is".to_string(),
        " not ok.".to_string(),
    ];

    let send = quote! {
        const ENDPOINT: &str = #name;
        let values = self.values()?;
    };
    let post = |response: TokenStream| {
        quote! {
            self.service
                .client
                .post_form::<#response>(ctx, ENDPOINT, &values)
                .await
                .map_err(|source| #runtime::MethodError::Post {
                    endpoint: ENDPOINT,
                    source,
                })?
        }
    };

    if !endpoint.has_return() {
        let envelope = post(quote! { #runtime::ResponseEnvelope });
        return Ok(quote! {
            #(#[doc = #docs])*
            pub async fn execute(&self, ctx: &#runtime::Context) -> Result<(), #runtime::MethodError> {
                #send
                let envelope = #envelope;
                if !envelope.ok {
                    return Err(#runtime::MethodError::Remote(envelope.error));
                }
                Ok(())
            }
        });
    }

    let return_type = parse_type(name, &endpoint.return_type)?;
    let serde_crate = format!("{}::serde", quote!(#runtime).to_string().replace(' ', ""));

    let (payload_attr, payload_name) = if endpoint.response_field.is_empty() {
        (quote! { #[serde(flatten)] }, endpoint.return_type.as_str())
    } else {
        let field = endpoint.response_field.as_str();
        (
            quote! { #[serde(default, rename = #field)] },
            endpoint.response_field.as_str(),
        )
    };

    let response = post(quote! { Response });

    Ok(quote! {
        #(#[doc = #docs])*
        pub async fn execute(
            &self,
            ctx: &#runtime::Context,
        ) -> Result<#return_type, #runtime::MethodError> {
            #[derive(#runtime::serde::Deserialize)]
            #[serde(crate = #serde_crate)]
            struct Response {
                #[serde(flatten)]
                envelope: #runtime::ResponseEnvelope,
                #payload_attr
                payload: Option<#return_type>,
            }

            #send
            let response = #response;
            if !response.envelope.ok {
                return Err(#runtime::MethodError::Remote(response.envelope.error));
            }
            response.payload.ok_or(#runtime::MethodError::MissingPayload {
                endpoint: ENDPOINT,
                field: #payload_name,
            })
        }
    })
}
