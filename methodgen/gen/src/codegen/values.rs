//! Generation of the `values()` form serializer.
//!
//! Arguments are visited in name order. An argument at its zero value is
//! unset: a required one aborts with `MissingParameter`, an optional one is
//! left out of the form. Booleans are therefore only ever sent as `"true"`
//! and integers only when non-zero.

use proc_macro2::TokenStream;
use quote::quote;

use super::CodegenContext;
use super::arguments::{ArgumentSpec, FieldKind};
use crate::plan::MethodPlan;

/// Generates `values()` for one call type.
pub fn generate_values_fn(
    ctx: &CodegenContext,
    method: &MethodPlan<'_>,
    arguments: &[ArgumentSpec<'_>],
) -> TokenStream {
    let runtime = &ctx.runtime;
    let doc = format!(
        " Serializes the `{}` arguments into form values.",
        method.endpoint.name
    );
    let errors_doc = [
        " ## Errors".to_string(),
        String::new(),
        " Returns `MethodError::MissingParameter` if a required argument is unset,".to_string(),
        " or `MethodError::Encode` if a list or object argument fails to encode.".to_string(),
    ];

    let token = if method.endpoint.skip_token {
        None
    } else {
        let key = &ctx.token_key;
        Some(quote! {
            values.set(#key, self.service.token.as_str());
        })
    };

    if token.is_none() && arguments.is_empty() {
        return quote! {
            #[doc = #doc]
            pub fn values(&self) -> Result<#runtime::Values, #runtime::MethodError> {
                Ok(#runtime::Values::new())
            }
        };
    }

    let statements = arguments.iter().map(|spec| generate_set(ctx, spec));

    quote! {
        #[doc = #doc]
        #[doc = ""]
        #(#[doc = #errors_doc])*
        pub fn values(&self) -> Result<#runtime::Values, #runtime::MethodError> {
            let mut values = #runtime::Values::new();
            #token
            #(#statements)*
            Ok(values)
        }
    }
}

/// Generates the statements serializing one argument.
fn generate_set(ctx: &CodegenContext, spec: &ArgumentSpec<'_>) -> TokenStream {
    let runtime = &ctx.runtime;
    let field = &spec.field;
    let name = spec.arg.name.as_str();
    let key = spec.arg.query_key();
    let missing = quote! {
        return Err(#runtime::MethodError::MissingParameter(#name));
    };
    let encode = |value: TokenStream| {
        quote! {
            #runtime::Encode::encode(#value).map_err(|source| #runtime::MethodError::Encode {
                field: #name,
                source,
            })?
        }
    };

    match (&spec.kind, spec.arg.required) {
        (FieldKind::Text, true) => quote! {
            if self.#field.is_empty() {
                #missing
            }
            values.set(#key, self.#field.as_str());
        },
        (FieldKind::Text, false) => quote! {
            if !self.#field.is_empty() {
                values.set(#key, self.#field.as_str());
            }
        },
        (FieldKind::Boolean, true) => quote! {
            if !self.#field {
                #missing
            }
            values.set(#key, "true");
        },
        (FieldKind::Boolean, false) => quote! {
            if self.#field {
                values.set(#key, "true");
            }
        },
        (FieldKind::Integer, true) => quote! {
            if self.#field == 0 {
                #missing
            }
            values.set(#key, self.#field.to_string());
        },
        (FieldKind::Integer, false) => quote! {
            if self.#field != 0 {
                values.set(#key, self.#field.to_string());
            }
        },
        (FieldKind::List(_), true) => {
            let encoded = encode(quote! { &self.#field });
            quote! {
                if self.#field.is_empty() {
                    #missing
                }
                values.set(#key, #encoded);
            }
        }
        (FieldKind::List(_), false) => {
            let encoded = encode(quote! { &self.#field });
            quote! {
                if !self.#field.is_empty() {
                    values.set(#key, #encoded);
                }
            }
        }
        (FieldKind::Object(_), true) => {
            let encoded = encode(quote! { value });
            quote! {
                let Some(value) = &self.#field else {
                    #missing
                };
                values.set(#key, #encoded);
            }
        }
        (FieldKind::Object(_), false) => {
            let encoded = encode(quote! { value });
            quote! {
                if let Some(value) = &self.#field {
                    values.set(#key, #encoded);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::format_generated_code;
    use methodgen_define::{ArgType, Argument, Endpoint};

    fn render(endpoint: &Endpoint) -> String {
        let method = MethodPlan::new(endpoint).unwrap();
        let specs: Vec<_> = method
            .arguments
            .iter()
            .map(|arg| ArgumentSpec::new(&endpoint.name, arg).unwrap())
            .collect();
        let tokens = generate_values_fn(&CodegenContext::default(), &method, &specs);
        format_generated_code(&quote! {
            impl Call<'_> {
                #tokens
            }
        })
        .unwrap()
    }

    fn endpoint(name: &str, arguments: Vec<Argument>) -> Endpoint {
        Endpoint {
            name: name.to_string(),
            arguments,
            ..Default::default()
        }
    }

    #[test]
    fn token_is_set_first() {
        let code = render(&endpoint("auth.test", vec![]));
        assert!(code.contains("let mut values = methodgen_runtime::Values::new();"));
        assert!(code.contains("values.set(\"token\", self.service.token.as_str());"));
        assert!(code.contains("Ok(values)"));
    }

    #[test]
    fn skip_token_with_no_arguments_returns_empty_values() {
        let ep = Endpoint {
            skip_token: true,
            ..endpoint("api.test", vec![])
        };
        let code = render(&ep);
        assert!(code.contains("Ok(methodgen_runtime::Values::new())"));
        assert!(!code.contains("token"));
        assert!(!code.contains("let mut values"));
    }

    #[test]
    fn skip_token_omits_token() {
        let ep = Endpoint {
            skip_token: true,
            ..endpoint("oauth.access", vec![Argument::required("code", ArgType::Text)])
        };
        let code = render(&ep);
        assert!(!code.contains("self.service.token"));
        assert!(code.contains("values.set(\"code\", self.code.as_str());"));
    }

    #[test]
    fn required_text_reports_missing_parameter() {
        let code = render(&endpoint(
            "chat.postMessage",
            vec![Argument::required("channel", ArgType::Text)],
        ));
        assert!(code.contains("if self.channel.is_empty() {"));
        assert!(code.contains(
            "return Err(methodgen_runtime::MethodError::MissingParameter(\"channel\"));"
        ));
    }

    #[test]
    fn optional_bool_is_sent_only_when_true() {
        let code = render(&endpoint(
            "chat.postMessage",
            vec![Argument::new("as_user", ArgType::Boolean)],
        ));
        assert!(code.contains("if self.as_user {"));
        assert!(code.contains("values.set(\"as_user\", \"true\");"));
    }

    #[test]
    fn optional_int_is_sent_only_when_non_zero() {
        let code = render(&endpoint(
            "channels.history",
            vec![Argument::new("count", ArgType::Integer)],
        ));
        assert!(code.contains("if self.count != 0 {"));
        assert!(code.contains("values.set(\"count\", self.count.to_string());"));
    }

    #[test]
    fn list_is_encoded() {
        let code = render(&endpoint(
            "chat.postMessage",
            vec![Argument::new("attachments", ArgType::List("Attachment".into()))],
        ));
        assert!(code.contains("if !self.attachments.is_empty() {"));
        assert!(code.contains("methodgen_runtime::Encode::encode(&self.attachments)"));
        assert!(code.contains("field: \"attachments\""));
    }

    #[test]
    fn objects_are_encoded_when_present() {
        let code = render(&endpoint(
            "dialog.open",
            vec![
                Argument::required("dialog", ArgType::Object("Dialog".into())),
                Argument::new("profile", ArgType::Object("Profile".into())),
            ],
        ));
        assert!(code.contains("let Some(value) = &self.dialog else {"));
        assert!(code.contains("if let Some(value) = &self.profile {"));
        assert!(code.contains("methodgen_runtime::Encode::encode(value)"));
    }

    #[test]
    fn query_name_overrides_key() {
        let mut arg = Argument::new("markdown", ArgType::Boolean);
        arg.query_name = "mrkdwn".to_string();
        let code = render(&endpoint("chat.postMessage", vec![arg]));
        assert!(code.contains("if self.markdown {"));
        assert!(code.contains("values.set(\"mrkdwn\", \"true\");"));
    }

    #[test]
    fn token_key_is_configurable() {
        let ep = endpoint("auth.test", vec![]);
        let method = MethodPlan::new(&ep).unwrap();
        let ctx = CodegenContext {
            token_key: "access_token".to_string(),
            ..CodegenContext::default()
        };
        let tokens = generate_values_fn(&ctx, &method, &[]);
        let code = format_generated_code(&quote! { impl Call<'_> { #tokens } }).unwrap();
        assert!(code.contains("values.set(\"access_token\", self.service.token.as_str());"));
    }
}
