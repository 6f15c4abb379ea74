//! Service handle generation.
//!
//! Every group gets one service type carrying the shared HTTP client and
//! the auth token. Services have no methods of their own; endpoint
//! constructors are attached from the endpoint's unit.
//!
//! A group whose endpoints all skip the token never reads `token`, so the
//! field allows dead code.

use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::CodegenContext;
use crate::plan::service_type_name;

/// Generates the service type for `group`.
pub fn generate_service(ctx: &CodegenContext, group: &str) -> TokenStream {
    let runtime = &ctx.runtime;
    let service = format_ident!("{}", service_type_name(group));
    let doc = format!(" {} handles {} related endpoints.", service, group);

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone)]
        pub struct #service {
            pub(crate) client: std::sync::Arc<#runtime::HttpClient>,
            #[allow(dead_code)]
            pub(crate) token: String,
        }
    }
}

/// Generates the aggregate `services` unit: every service, sorted by group.
pub fn generate_services_unit(ctx: &CodegenContext, groups: &BTreeSet<String>) -> TokenStream {
    let services = groups.iter().map(|group| generate_service(ctx, group));
    quote! {
        #(#services)*
    }
}
