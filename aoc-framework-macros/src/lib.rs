//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::parse::Parse;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// Properties given to `#[solution_runner(...)]`.
#[derive(Default)]
struct RunnerProperties {
    /// The expression to use as a solution name; should resolve to string slice
    name: Option<Expr>,
    /// The type to use for a `ParseData` generic parameter
    parsed: Option<Type>,
    /// The type to use for a `Solution<PartOne>` generic parameter
    part_one: Option<Type>,
    /// The type to use for a `Solution<PartTwo>` generic parameter
    part_two: Option<Type>,
}

/// Parse a property's value into a slot, erroring if the slot was already set.
fn set_once<T: Parse>(
    slot: &mut Option<T>,
    meta: &ParseNestedMeta<'_>,
    key: &str,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate '{key}' property")));
    }
    *slot = Some(meta.value()?.parse()?);
    Ok(())
}

impl RunnerProperties {
    fn parse_property(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("name") {
            set_once(&mut self.name, meta, "name")
        } else if meta.path.is_ident("parsed") {
            set_once(&mut self.parsed, meta, "parsed")
        } else if meta.path.is_ident("part_one") {
            set_once(&mut self.part_one, meta, "part_one")
        } else if meta.path.is_ident("part_two") {
            set_once(&mut self.part_two, meta, "part_two")
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    }

    /// Build the body of `SolutionRunner::run`, stepping a `Runner` through each stage.
    fn run_body(self) -> syn::Result<proc_macro2::TokenStream> {
        let name_expr = self.name.ok_or_else(|| {
            Error::new(Span::call_site(), "missing required property: 'name'")
        })?;
        let part_one_ty = self.part_one.ok_or_else(|| {
            Error::new(Span::call_site(), "missing required property: 'part_one'")
        })?;

        let parse_step = match self.parsed {
            Some(parsed_ty) => quote! {
                let parsed = runner.parse::<#parsed_ty>(input)?;
                let parsed = &parsed;
            },
            None => quote! {
                let parsed: &str = input;
            },
        };
        let part_two_step = self.part_two.map(|part_two_ty| {
            quote! {
                runner.part::<#part_two_ty, aoc_framework::PartTwo>(parsed)?;
            }
        });

        Ok(quote! {
            let mut runner = aoc_framework::runner::Runner::start(#name_expr, handler, options);
            #parse_step
            runner.part::<#part_one_ty, aoc_framework::PartOne>(parsed)?;
            #part_two_step
            Ok(())
        })
    }
}

/// Procedural macro attribute that generates a `SolutionRunner` implementation.
///
/// The generated `run` starts a `Runner` with the solution's name, optionally parses the input,
/// then solves part one and, if given, part two.
///
/// # Properties
///
/// - `name` (required): An expression that evaluates to `&str`, the solution's display name.
///   Can be a string literal or a constant.
///
/// - `part_one` (required): The type implementing `Solution<PartOne>`.
///
/// - `part_two` (optional): The type implementing `Solution<PartTwo>`.
///
/// - `parsed` (optional): A type that implements `ParseData`, used to parse input before solving.
///   If omitted, the unparsed input string is passed directly to solvers.
///
/// # Errors
///
/// Returns a compile error if:
/// - Applied to anything other than a struct or impl block
/// - Required properties (`name`, `part_one`) are missing
/// - Any property is specified more than once
/// - An unsupported property is provided
///
/// # Examples
///
/// ```ignore
/// #[solution_runner(name = "Day 4: Printing Department", parsed = PaperGrid, part_one = Day04)]
/// struct Day04Runner;
///
/// #[solution_runner(
///     name = "Day 7: Laboratories",
///     parsed = Manifold,
///     part_one = Day07,
///     part_two = Day07
/// )]
/// impl AdventOfCode2025<7> {}
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut properties = RunnerProperties::default();
    let properties_parser = syn::meta::parser(|meta| properties.parse_property(&meta));
    parse_macro_input!(args with properties_parser);

    let run_body = match properties.run_body() {
        Ok(tokens) => tokens,
        Err(error) => return error.to_compile_error().into(),
    };

    let original_input = proc_macro2::TokenStream::from(input.clone());
    let item = parse_macro_input!(input as Item);

    let self_ty = match item {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return Error::new(
                Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    TokenStream::from(quote! {
        #original_input

        impl aoc_framework::runner::SolutionRunner for #self_ty {
            fn run(
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                options: aoc_framework::runner::RunOptions,
            ) -> aoc_framework::DynamicResult<()> {
                #run_body
            }
        }
    })
}
