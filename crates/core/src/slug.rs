//! URL slugs for catalog links (`/kategorija/12-kucanski-aparati`).

use core::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Turn a display name into a lowercase ASCII slug.
///
/// Latin diacritics are transliterated, every run of other characters
/// collapses into a single `-`, and separators never lead or trail.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.chars() {
        let mapped = transliterate(ch);
        if mapped.is_empty() {
            pending_separator = true;
            continue;
        }
        if pending_separator && !slug.is_empty() {
            slug.push('-');
        }
        pending_separator = false;
        slug.push_str(&mapped);
    }

    slug
}

fn transliterate(ch: char) -> String {
    if ch.is_ascii_alphanumeric() {
        return ch.to_ascii_lowercase().to_string();
    }

    let ascii = match ch {
        'č' | 'ć' | 'ç' | 'Č' | 'Ć' | 'Ç' => "c",
        'š' | 'Š' => "s",
        'ž' | 'Ž' => "z",
        'đ' | 'Đ' => "d",
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "a",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => "u",
        'ñ' | 'Ñ' => "n",
        'ý' | 'ÿ' | 'Ý' => "y",
        'ß' => "ss",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        _ => "",
    };
    ascii.to_string()
}

/// Split an `{id}-{slug}` path segment.
///
/// The id is everything before the first `-` and must parse as `T`; the slug
/// is the (non-empty) remainder. The slug is not checked against the current
/// name, so stale links still resolve by id.
pub fn split_slugged_id<T>(segment: &str) -> DomainResult<(T, &str)>
where
    T: FromStr<Err = DomainError>,
{
    let (id, slug) = segment
        .split_once('-')
        .ok_or_else(|| DomainError::validation(format!("missing slug in {segment:?}")))?;

    if slug.is_empty() {
        return Err(DomainError::validation(format!("empty slug in {segment:?}")));
    }

    Ok((id.parse()?, slug))
}
