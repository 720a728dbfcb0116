use std::collections::HashSet;

use crate::models::Post;

/// Combina posts recién bajados con la ventana cacheada.
///
/// Los entrantes van primero. La deduplicación es por `id`: cuando un id
/// aparece en ambas secuencias gana la entrada entrante. El resultado se
/// trunca a `limit` — lo que quede del caché más allá de la ventana se
/// descarta, el caché nunca crece más de una página.
///
/// Función pura, sin efectos; el motor persiste el resultado aparte.
pub fn merge_posts(incoming: &[Post], cached: &[Post], limit: usize) -> Vec<Post> {
    let mut seen: HashSet<u64> = HashSet::with_capacity(limit);
    let mut merged: Vec<Post> = Vec::with_capacity(limit);

    for post in incoming.iter().chain(cached.iter()) {
        if merged.len() == limit {
            break;
        }
        if seen.insert(post.id) {
            merged.push(post.clone());
        }
    }

    merged
}
