//! `#[router_proxy]` attribute implementation.
//!
//! The routing attributes are stripped from the trait in place, so the trait
//! is re-emitted even when a method is rejected and only the offending items
//! carry errors.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{
	Attribute, FnArg, Ident, ItemTrait, LitStr, Pat, ReturnType, Signature, Token, TraitItem,
	TraitItemFn, Type, parse_macro_input,
};

/// A trait method with its routing metadata.
struct RoutedMethod {
	/// Signature with routing attributes removed.
	sig: Signature,
	action: String,
	params: Vec<RoutedParam>,
}

struct RoutedParam {
	ident: Ident,
	keys: Vec<String>,
	/// Borrowed parameters are converted with `ToOwned` before dispatch.
	borrowed: bool,
}

pub fn router_proxy(attr: TokenStream, item: TokenStream) -> TokenStream {
	if !attr.is_empty() {
		return syn::Error::new(Span::call_site(), "router_proxy takes no arguments")
			.to_compile_error()
			.into();
	}

	let mut input = parse_macro_input!(item as ItemTrait);
	match expand(&mut input) {
		Ok(tokens) => tokens.into(),
		Err(error) => {
			let error = error.to_compile_error();
			quote! { #input #error }.into()
		}
	}
}

fn expand(input: &mut ItemTrait) -> syn::Result<TokenStream2> {
	let mut methods = Vec::new();
	let mut errors: Option<syn::Error> = None;

	for item in &mut input.items {
		let result = match item {
			TraitItem::Fn(method) => parse_method(method).map(|method| methods.push(method)),
			other => Err(syn::Error::new_spanned(&*other, "router_proxy traits may only declare methods")),
		};
		if let Err(error) = result {
			push_error(&mut errors, error);
		}
	}
	if !input.generics.params.is_empty() {
		push_error(
			&mut errors,
			syn::Error::new_spanned(&input.generics, "router_proxy traits cannot be generic"),
		);
	}
	if let Some(errors) = errors {
		return Err(errors);
	}

	let vis = &input.vis;
	let trait_name = &input.ident;
	let trait_name_str = trait_name.to_string();
	let proxy_name = format_ident!("{}Proxy", trait_name);
	let proxy_doc = format!("Navigation proxy for [`{trait_name_str}`].");

	let method_meta = methods.iter().map(|method| {
		let name = method.sig.ident.to_string();
		let action = &method.action;
		let params = method.params.iter().map(|param| {
			let keys = &param.keys;
			quote! { &[#(#keys),*] }
		});
		quote! {
			::waypoint_router::RouteMethod {
				name: #name,
				action: ::core::option::Option::Some(#action),
				params: &[#(#params),*],
			}
		}
	});

	let method_impls = methods.iter().map(|method| {
		let sig = &method.sig;
		let name = method.sig.ident.to_string();
		let owned = method.params.iter().filter(|param| param.borrowed).map(|param| {
			let ident = &param.ident;
			quote! { let #ident = ::std::borrow::ToOwned::to_owned(#ident); }
		});
		let args = method.params.iter().map(|param| {
			let ident = &param.ident;
			quote! { ::waypoint_router::ProxyArg::new(&#ident) }
		});
		quote! {
			#sig {
				#(#owned)*
				self.dispatcher.invoke(#name, &[#(#args),*])
			}
		}
	});

	Ok(quote! {
		#input

		#[doc = #proxy_doc]
		#[derive(Debug, Clone)]
		#vis struct #proxy_name {
			dispatcher: ::waypoint_router::ProxyDispatcher,
		}

		impl ::waypoint_router::RouterProxy for #proxy_name {
			const INTERFACE: &'static ::waypoint_router::RouteInterface = &::waypoint_router::RouteInterface {
				name: #trait_name_str,
				methods: &[#(#method_meta),*],
			};

			fn from_dispatcher(dispatcher: ::waypoint_router::ProxyDispatcher) -> Self {
				Self { dispatcher }
			}

			fn dispatcher(&self) -> &::waypoint_router::ProxyDispatcher {
				&self.dispatcher
			}
		}

		impl #trait_name for #proxy_name {
			#(#method_impls)*
		}
	})
}

/// Strips the routing attributes off `method` and validates its shape.
fn parse_method(method: &mut TraitItemFn) -> syn::Result<RoutedMethod> {
	let route_attrs = take_attrs(&mut method.attrs, "route");
	let key_attrs: Vec<_> = method
		.sig
		.inputs
		.iter_mut()
		.filter_map(|input| match input {
			FnArg::Typed(pat) => Some(take_attrs(&mut pat.attrs, "key")),
			FnArg::Receiver(_) => None,
		})
		.collect();

	let sig = &method.sig;
	let action = match route_attrs.as_slice() {
		[] => {
			return Err(syn::Error::new_spanned(
				&sig.ident,
				format!("method `{}` is missing #[route(action = \"...\")]", sig.ident),
			));
		}
		[attr] => parse_route(attr)?,
		[_, extra, ..] => return Err(syn::Error::new_spanned(extra, "duplicate #[route] attribute")),
	};

	if let Some(body) = &method.default {
		return Err(syn::Error::new_spanned(body, "routed methods cannot have a default body"));
	}
	if !sig.generics.params.is_empty() {
		return Err(syn::Error::new_spanned(&sig.generics, "routed methods cannot be generic"));
	}
	if let Some(asyncness) = &sig.asyncness {
		return Err(syn::Error::new_spanned(asyncness, "routed methods must be synchronous"));
	}
	match sig.receiver() {
		Some(receiver) if receiver.reference.is_some() && receiver.mutability.is_none() => {}
		_ => return Err(syn::Error::new_spanned(sig, "routed methods must take `&self`")),
	}
	if let ReturnType::Default = sig.output {
		return Err(syn::Error::new_spanned(
			sig,
			"routed methods must return `waypoint_router::Result<DispatchOutcome>`",
		));
	}

	let typed = sig.inputs.iter().filter_map(|input| match input {
		FnArg::Typed(pat) => Some(pat),
		FnArg::Receiver(_) => None,
	});
	let mut params = Vec::new();
	for (pat, attrs) in typed.zip(&key_attrs) {
		let ident = match &*pat.pat {
			Pat::Ident(binding) if binding.by_ref.is_none() && binding.subpat.is_none() => binding.ident.clone(),
			other => return Err(syn::Error::new_spanned(other, "routed parameters must be plain identifiers")),
		};
		let mut keys = Vec::new();
		for attr in attrs {
			keys.extend(parse_keys(attr)?);
		}
		params.push(RoutedParam {
			ident,
			keys,
			borrowed: matches!(*pat.ty, Type::Reference(_)),
		});
	}

	Ok(RoutedMethod {
		sig: sig.clone(),
		action,
		params,
	})
}

fn push_error(errors: &mut Option<syn::Error>, error: syn::Error) {
	match errors {
		Some(all) => all.combine(error),
		None => *errors = Some(error),
	}
}

fn take_attrs(attrs: &mut Vec<Attribute>, name: &str) -> Vec<Attribute> {
	let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(attrs)
		.into_iter()
		.partition(|attr| attr.path().is_ident(name));
	*attrs = kept;
	taken
}

/// Accepts `#[route("action")]` and `#[route(action = "action")]`.
fn parse_route(attr: &Attribute) -> syn::Result<String> {
	let action = match attr.parse_args::<LitStr>() {
		Ok(lit) => lit,
		Err(_) => {
			let mut action = None;
			attr.parse_nested_meta(|meta| {
				if meta.path.is_ident("action") {
					action = Some(meta.value()?.parse::<LitStr>()?);
					Ok(())
				} else {
					Err(meta.error("unknown route attribute, expected `action`"))
				}
			})?;
			action.ok_or_else(|| syn::Error::new_spanned(attr, "missing required 'action' attribute"))?
		}
	};

	if action.value().is_empty() {
		return Err(syn::Error::new_spanned(action, "route action cannot be empty"));
	}
	Ok(action.value())
}

/// Accepts `#[key("a")]` and `#[key("a", "b")]`.
fn parse_keys(attr: &Attribute) -> syn::Result<Vec<String>> {
	let lits = attr.parse_args_with(Punctuated::<LitStr, Token![,]>::parse_terminated)?;
	if lits.is_empty() {
		return Err(syn::Error::new_spanned(attr, "#[key] needs at least one payload key"));
	}
	lits.into_iter()
		.map(|lit| match lit.value() {
			key if key.is_empty() => Err(syn::Error::new_spanned(lit, "payload key cannot be empty")),
			key => Ok(key),
		})
		.collect()
}
