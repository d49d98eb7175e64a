use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemFn, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

type Expansion<T> = Result<T, TokenStream>;

/// Expands `#[api_model]`: serde derives, optional `ToSchema`, and the serde policy.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match api_model_tokens(args, &input) {
        Ok(tokens) => tokens,
        Err(err) => err,
    }
}

fn api_model_tokens(args: TokenStream, input: &ItemStruct) -> Expansion<TokenStream> {
    let args = ApiModelArgs::parse(args)?;
    let derives = derived_trait_names(&input.attrs);
    let serde = SerdeAttrs::collect(&input.attrs)?;

    let missing: Vec<TokenStream> = [
        ("Debug", quote! { Debug }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ]
    .into_iter()
    .filter(|(name, _)| !derives.contains(*name))
    .map(|(_, tokens)| tokens)
    .collect();

    let derive_attr = if missing.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#missing),*)] }
    };

    let schema_attr = if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let rename = args.rename_all.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));
    let rename_attr = match &serde.rename_all {
        Some(existing) if existing.value() != rename.value() => {
            return Err(spanned_error(
                existing,
                "Conflicting serde rename_all; remove it or set api_model(rename_all = \"...\") to match",
            ));
        }
        Some(_) => quote! {},
        None => quote! { #[serde(rename_all = #rename)] },
    };

    let deny = args.deny_unknown_fields.unwrap_or(true);
    let deny_attr = match (serde.deny_unknown_fields, deny) {
        (true, false) => {
            return Err(spanned_error(
                &input.ident,
                "deny_unknown_fields is already set via serde; remove it before disabling",
            ));
        }
        (false, true) => quote! { #[serde(deny_unknown_fields)] },
        _ => quote! {},
    };

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #input
    })
}

/// Expands `#[api_handler]`: forwards the arguments to `utoipa::path` behind the `server` feature.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

#[derive(Default)]
struct ApiModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

impl ApiModelArgs {
    fn parse(args: TokenStream) -> Expansion<Self> {
        let metas = Punctuated::<Meta, Token![,]>::parse_terminated
            .parse2(args)
            .map_err(|err| err.to_compile_error())?;

        let mut parsed = Self::default();
        for meta in metas {
            let pair = match meta {
                Meta::NameValue(pair) => pair,
                other => {
                    return Err(spanned_error(
                        other,
                        "Expected name-value arguments like `rename_all = \"...\"`",
                    ));
                }
            };

            if pair.path.is_ident("rename_all") {
                let Lit::Str(value) = literal(&pair, "rename_all must be a string literal")? else {
                    return Err(spanned_error(&pair.value, "rename_all must be a string literal"));
                };
                set_once(&mut parsed.rename_all, &pair, value)?;
            } else if pair.path.is_ident("deny_unknown_fields") {
                let Lit::Bool(value) = literal(&pair, "deny_unknown_fields must be a boolean")?
                else {
                    return Err(spanned_error(&pair.value, "deny_unknown_fields must be a boolean"));
                };
                set_once(&mut parsed.deny_unknown_fields, &pair, value.value)?;
            } else {
                return Err(spanned_error(
                    &pair.path,
                    "Unsupported argument; expected rename_all or deny_unknown_fields",
                ));
            }
        }

        Ok(parsed)
    }
}

fn literal(pair: &MetaNameValue, message: &str) -> Expansion<Lit> {
    match &pair.value {
        Expr::Lit(expr) => Ok(expr.lit.clone()),
        other => Err(spanned_error(other, message)),
    }
}

fn set_once<T>(slot: &mut Option<T>, pair: &MetaNameValue, value: T) -> Expansion<()> {
    if slot.is_some() {
        return Err(spanned_error(pair, "Duplicate argument"));
    }
    *slot = Some(value);
    Ok(())
}

struct SerdeAttrs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

impl SerdeAttrs {
    fn collect(attrs: &[Attribute]) -> Expansion<Self> {
        let mut rename_all = None;
        let mut deny_unknown_fields = false;

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    rename_all = Some(meta.value()?.parse::<LitStr>()?);
                } else if meta.path.is_ident("deny_unknown_fields") {
                    deny_unknown_fields = true;
                }
                Ok(())
            })
            .map_err(|err| err.to_compile_error())?;
        }

        Ok(Self { rename_all, deny_unknown_fields })
    }
}

fn spanned_error(tokens: impl quote::ToTokens, message: &str) -> TokenStream {
    syn::Error::new_spanned(tokens, message).to_compile_error()
}

fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}
