//! Per-endpoint call generation.
//!
//! For `chat.postMessage` with a required `channel` this emits:
//!
//! ```ignore
//! pub struct ChatPostMessageCall<'a> {
//!     service: &'a super::services::ChatService,
//!     channel: String,
//!     // ...one private field per argument, sorted by name
//! }
//!
//! impl super::services::ChatService {
//!     pub fn post_message(&self, channel: impl Into<String>) -> ChatPostMessageCall<'_>;
//! }
//!
//! impl ChatPostMessageCall<'_> {
//!     // optional setters, values(), execute()
//! }
//! ```

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tracing::debug;

use super::CodegenContext;
use super::arguments::ArgumentSpec;
use super::execute::generate_execute_fn;
use super::values::generate_values_fn;
use crate::errors::GeneratorError;
use crate::naming::rust_ident;
use crate::plan::MethodPlan;

/// Generates the call type, constructor and call methods for one endpoint.
///
/// ## Errors
///
/// Returns `GeneratorError::InvalidType` if an argument or return type does
/// not parse.
pub fn generate_call(
    ctx: &CodegenContext,
    method: &MethodPlan<'_>,
) -> Result<TokenStream, GeneratorError> {
    let endpoint = method.endpoint;
    debug!(endpoint = %endpoint.name, call = %method.call_type(), "generating call");

    let arguments = method
        .arguments
        .iter()
        .map(|arg| ArgumentSpec::new(&endpoint.name, arg))
        .collect::<Result<Vec<_>, _>>()?;

    let call = format_ident!("{}", method.call_type());
    let service = format_ident!("{}", method.service_type());
    let constructor = rust_ident(&method.constructor());

    let struct_docs = struct_docs(method);
    let fields = arguments.iter().map(ArgumentSpec::field_decl);

    let params = arguments
        .iter()
        .filter(|spec| spec.arg.required)
        .map(ArgumentSpec::param);
    let inits = arguments.iter().map(|spec| {
        if spec.arg.required {
            spec.param_init()
        } else {
            let field = &spec.field;
            let zero = spec.zero_value();
            quote! { #field: #zero }
        }
    });
    let constructor_doc = format!(" Starts a `{}` call.", endpoint.name);

    let setters = arguments
        .iter()
        .filter(|spec| !spec.arg.required)
        .map(ArgumentSpec::setters);
    let values_fn = generate_values_fn(ctx, method, &arguments);
    let execute_fn = generate_execute_fn(ctx, endpoint)?;

    Ok(quote! {
        #(#[doc = #struct_docs])*
        #[derive(Debug, Clone)]
        pub struct #call<'a> {
            service: &'a super::services::#service,
            #(#fields,)*
        }

        impl super::services::#service {
            #[doc = #constructor_doc]
            pub fn #constructor(&self, #(#params),*) -> #call<'_> {
                #call {
                    service: self,
                    #(#inits,)*
                }
            }
        }

        impl #call<'_> {
            #(#setters)*

            #values_fn

            #execute_fn
        }
    })
}

fn struct_docs(method: &MethodPlan<'_>) -> Vec<String> {
    let endpoint = method.endpoint;
    let mut lines = vec![format!(
        " {} holds the arguments of a `{}` call.",
        method.call_type(),
        endpoint.name
    )];

    let required: Vec<_> = method
        .required_arguments()
        .map(|arg| format!("`{}`", arg.name))
        .collect();
    if !required.is_empty() {
        lines.push(String::new());
        lines.push(format!(" Required: {}.", required.join(", ")));
    }

    let returns = if endpoint.has_return() {
        format!(" `execute()` returns `{}`.", endpoint.return_type)
    } else {
        " `execute()` only reports success or failure.".to_string()
    };
    lines.push(String::new());
    lines.push(returns);
    lines
}

/// Generates one output unit: every call of the unit, in the given order.
///
/// ## Errors
///
/// Returns the first error raised by [`generate_call`].
pub fn generate_unit(
    ctx: &CodegenContext,
    methods: &[MethodPlan<'_>],
) -> Result<TokenStream, GeneratorError> {
    let calls = methods
        .iter()
        .map(|method| generate_call(ctx, method))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(quote! {
        #(#calls)*
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::arguments::comment_lines;
    use crate::codegen::format_generated_code;
    use methodgen_define::{ArgType, Argument, Endpoint};

    fn post_message() -> Endpoint {
        let mut channel = Argument::required("channel", ArgType::Text);
        channel.comment = "Channel, private group, or IM channel to send message to.".to_string();
        let mut markdown = Argument::new("markdown", ArgType::Boolean);
        markdown.query_name = "mrkdwn".to_string();

        Endpoint {
            name: "chat.postMessage".to_string(),
            response_field: "message".to_string(),
            return_type: "crate::objects::Message".to_string(),
            arguments: vec![
                Argument::new("text", ArgType::Text),
                channel,
                Argument::new("attachments", ArgType::List("crate::objects::Attachment".into())),
                Argument::new("as_user", ArgType::Boolean),
                markdown,
            ],
            ..Default::default()
        }
    }

    fn render(endpoint: &Endpoint) -> String {
        let method = MethodPlan::new(endpoint).unwrap();
        let tokens = generate_call(&CodegenContext::default(), &method).unwrap();
        format_generated_code(&tokens).unwrap()
    }

    #[test]
    fn call_struct_borrows_service() {
        let code = render(&post_message());
        assert!(code.contains("#[derive(Debug, Clone)]"));
        assert!(code.contains("pub struct ChatPostMessageCall<'a> {"));
        assert!(code.contains("service: &'a super::services::ChatService,"));
        assert!(code.contains("impl ChatPostMessageCall<'_> {"));
    }

    #[test]
    fn fields_are_sorted_and_private() {
        let code = render(&post_message());
        let order: Vec<_> = [
            "    as_user: bool,",
            "    attachments: Vec<crate::objects::Attachment>,",
            "    channel: String,",
            "    markdown: bool,",
            "    text: String,",
        ]
        .iter()
        .map(|field| code.find(field).unwrap_or_else(|| panic!("missing {field}")))
        .collect();
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(!code.contains("pub as_user"));
    }

    #[test]
    fn argument_comment_documents_field() {
        let code = render(&post_message());
        for line in comment_lines(&post_message().arguments[1].comment) {
            assert!(code.contains(&format!("///{line}")));
        }
    }

    #[test]
    fn constructor_takes_required_arguments() {
        let code = render(&post_message());
        assert!(code.contains("impl super::services::ChatService {"));
        assert!(code.contains(
            "pub fn post_message(&self, channel: impl Into<String>) -> ChatPostMessageCall<'_> {"
        ));
        assert!(code.contains("service: self,"));
        assert!(code.contains("channel: channel.into(),"));
        assert!(code.contains("as_user: false,"));
        assert!(code.contains("attachments: Vec::new(),"));
        assert!(code.contains("text: String::new(),"));
    }

    #[test]
    fn setters_cover_optional_arguments_only() {
        let code = render(&post_message());
        assert!(code.contains("pub fn as_user(mut self, as_user: bool) -> Self"));
        assert!(code.contains("pub fn markdown(mut self, markdown: bool) -> Self"));
        assert!(code.contains("pub fn text(mut self, text: impl Into<String>) -> Self"));
        assert!(code.contains("pub fn set_attachments("));
        assert!(code.contains("pub fn attachment("));
        assert!(!code.contains("pub fn channel("));
    }

    #[test]
    fn call_exposes_values_and_execute() {
        let code = render(&post_message());
        assert!(code.contains("pub fn values("));
        assert!(code.contains("-> Result<methodgen_runtime::Values, methodgen_runtime::MethodError>"));
        assert!(code.contains("pub async fn execute("));
    }

    #[test]
    fn endpoint_without_arguments() {
        let endpoint = Endpoint {
            name: "auth.test".to_string(),
            return_type: "crate::objects::AuthTestResponse".to_string(),
            ..Default::default()
        };
        let code = render(&endpoint);
        assert!(code.contains("pub struct AuthTestCall<'a> {"));
        assert!(code.contains("pub fn test(&self) -> AuthTestCall<'_> {"));
        assert!(code.contains("service: self"));
        assert!(!code.contains("pub fn set_"));
    }

    #[test]
    fn required_object_constructor() {
        let endpoint = Endpoint {
            name: "dialog.open".to_string(),
            arguments: vec![
                Argument::required("dialog", ArgType::Object("crate::objects::Dialog".into())),
                Argument::required("trigger_id", ArgType::Text),
            ],
            ..Default::default()
        };
        let code = render(&endpoint);
        assert!(code.contains("dialog: Option<crate::objects::Dialog>,"));
        assert!(code.contains("dialog: crate::objects::Dialog,"));
        assert!(code.contains("dialog: Some(dialog),"));
        assert!(code.contains("trigger_id: impl Into<String>,"));
    }

    #[test]
    fn unit_keeps_method_order() {
        let catalog = methodgen_define::Catalog::new(vec![
            Endpoint {
                name: "chat.update".to_string(),
                ..Default::default()
            },
            Endpoint {
                name: "chat.delete".to_string(),
                ..Default::default()
            },
        ]);
        let plan = crate::plan::Plan::new(&catalog).unwrap();
        let tokens = generate_unit(&CodegenContext::default(), &plan.units["chat"]).unwrap();
        let code = format_generated_code(&tokens).unwrap();
        let delete = code.find("pub struct ChatDeleteCall").unwrap();
        let update = code.find("pub struct ChatUpdateCall").unwrap();
        assert!(delete < update);
    }
}
