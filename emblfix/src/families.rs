//! Gene families from a comparative genomics run.
//!
//! A family line looks like
//! `family 5168 : SPAL_0001096400.1:mRNA (strongyloides_papillosus) Bm11175 (brugia_malayi) ...`,
//! i.e., a header, then `gene (species)` pairs.
use crate::normalize::{canonicalize, rename_if_needed};
use definitions::{FixError, LocusTag, Result};
use std::collections::HashSet;
use std::io::BufRead;

/// Canonical names of the genes of `species` that belong to any family.
pub fn genes_in_families<R: BufRead>(
    reader: R,
    species: &str,
    locus_tag: &LocusTag,
) -> Result<HashSet<String>> {
    let mut genes = HashSet::new();
    let mut families = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if !line.starts_with("family") {
            continue;
        }
        families += 1;
        let members = line.split(": ").nth(1).ok_or_else(|| FixError::MalformedLine {
            line_num: idx + 1,
            line: line.to_string(),
            reason: "family line without `: ` separator",
        })?;
        for (gene, member_species) in members_of(members) {
            let gene = canonicalize(gene, Some(member_species));
            if member_species == species {
                genes.insert(rename_if_needed(gene, locus_tag)?);
            }
        }
    }
    debug!("Family\tFamilies\t{}", families);
    debug!("Family\tGenes\t{}", genes.len());
    Ok(genes)
}

// (gene, species) pairs; a trailing unpaired token is ignored.
fn members_of<'a>(members: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
    let mut tokens = members.split_whitespace();
    std::iter::from_fn(move || {
        let gene = tokens.next()?;
        let species = tokens.next()?;
        Some((gene, strip_parentheses(species)))
    })
}

fn strip_parentheses(species: &str) -> &str {
    let mut chars = species.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
