mod case;
mod lenses;
mod prisms;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Lenses)] derive macro
// ============================================================================

/// Derive one `Lens` per named field.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Default, Lenses)]
/// struct AppState {
///     pub episodes: Vec<Episode>,
///     pub watched: Vec<u32>,
///     #[lens(skip)]
///     cache: Cache,
/// }
///
/// let watched: Lens<AppState, Vec<u32>> = AppStateLenses::watched();
/// ```
///
/// - Generates a unit struct `<Name>Lenses` with one associated fn per field.
/// - Each fn has the visibility of its field.
/// - `#[lens(skip)]` leaves a field out.
/// - Field types must be `Clone`.
#[proc_macro_derive(Lenses, attributes(lens))]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses(input)
}

// ============================================================================
// #[derive(Prisms)] derive macro
// ============================================================================

/// Derive one `Prism` per enum variant.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Prisms)]
/// enum AppAction {
///     Episodes(EpisodeAction),
///     Account(AccountAction),
///     Moved { x: i32, y: i32 },
///     Reset,
/// }
///
/// let episodes: Prism<AppAction, EpisodeAction> = AppActionPrisms::episodes();
/// let moved: Prism<AppAction, (i32, i32)> = AppActionPrisms::moved();
/// let reset: Prism<AppAction, ()> = AppActionPrisms::reset();
/// ```
///
/// - Generates a unit struct `<Name>Prisms` with one snake_case fn per variant.
/// - Unit variants focus `()`.
/// - Single-field variants focus the field's type.
/// - Multi-field variants focus a tuple of their fields in declaration order.
/// - `#[prism(skip)]` leaves a variant out.
#[proc_macro_derive(Prisms, attributes(prism))]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms(input)
}

/// True if `attrs` carries `#[<name>(skip)]`.
fn has_skip(attrs: &[syn::Attribute], name: &str) -> syn::Result<bool> {
    let mut skip = false;
    for attr in attrs {
        if !attr.path().is_ident(name) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error(format!("unsupported `{}` attribute", name)))
            }
        })?;
    }
    Ok(skip)
}
