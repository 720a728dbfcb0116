//! Aritmética de paginación y ventana de números de página.

/// Total de páginas para `total` elementos en páginas de `limit`.
/// Con cero posts devolvemos 1: la UI de paginación se oculta igualmente,
/// pero `page` siempre tiene un rango válido `[1, total_pages]`.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if total == 0 {
        1
    } else {
        total.div_ceil(limit as u64) as u32
    }
}

/// Valida la entrada cruda de navegación: entero positivo o nada.
pub fn parse_page(raw: &str) -> Option<u32> {
    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 1 => u32::try_from(n).ok(),
        _ => None,
    }
}

/// Rango "Mostrando X-Y de Z" para la página actual.
pub fn item_range(page: u32, limit: u32, total: u64) -> (u64, u64) {
    let start = (page as u64 - 1) * limit as u64 + 1;
    let end = (page as u64 * limit as u64).min(total);
    (start, end)
}

/// Casilla de la barra de paginación: un número o puntos suspensivos.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSlot {
    Num(u32),
    Ellipsis,
}

/// Máximo 7 casillas visibles, comprimidas con elipsis:
/// - hasta 7 páginas: todas
/// - página <= 4:              1..=5 … N
/// - página >= N-3:            1 … N-4..=N
/// - resto:                    1 … p-1..=p+1 … N
pub fn page_numbers(page: u32, total_pages: u32) -> Vec<PageSlot> {
    const MAX_VISIBLE: u32 = 7;
    let mut slots = Vec::new();

    if total_pages <= MAX_VISIBLE {
        for i in 1..=total_pages {
            slots.push(PageSlot::Num(i));
        }
    } else if page <= 4 {
        for i in 1..=5 {
            slots.push(PageSlot::Num(i));
        }
        slots.push(PageSlot::Ellipsis);
        slots.push(PageSlot::Num(total_pages));
    } else if page >= total_pages - 3 {
        slots.push(PageSlot::Num(1));
        slots.push(PageSlot::Ellipsis);
        for i in (total_pages - 4)..=total_pages {
            slots.push(PageSlot::Num(i));
        }
    } else {
        slots.push(PageSlot::Num(1));
        slots.push(PageSlot::Ellipsis);
        for i in (page - 1)..=(page + 1) {
            slots.push(PageSlot::Num(i));
        }
        slots.push(PageSlot::Ellipsis);
        slots.push(PageSlot::Num(total_pages));
    }

    slots
}
