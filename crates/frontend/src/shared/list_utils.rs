/// Утилиты для списков: сортировка и подсветка совпадений поиска
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сортирует список по указанному полю (стабильно)
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Сравнение строк без учёта регистра
pub fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Разбивает текст на (фрагмент, совпадение?) для подсветки (case-insensitive)
pub fn split_matches(text: &str, filter: &str) -> Vec<(String, bool)> {
    let filter = filter.trim();
    if filter.is_empty() {
        return vec![(text.to_string(), false)];
    }

    // Позиции ищем по символам, чтобы не резать UTF-8 при смене регистра
    let chars: Vec<char> = text.chars().collect();
    let lower: Vec<char> = chars.iter().flat_map(|c| c.to_lowercase()).collect();
    let needle: Vec<char> = filter.chars().flat_map(|c| c.to_lowercase()).collect();
    if lower.len() != chars.len() {
        return vec![(text.to_string(), false)];
    }

    let mut parts = Vec::new();
    let mut last = 0;
    let mut i = 0;
    while i + needle.len() <= lower.len() {
        if lower[i..i + needle.len()] == needle[..] {
            if i > last {
                parts.push((chars[last..i].iter().collect(), false));
            }
            parts.push((chars[i..i + needle.len()].iter().collect(), true));
            i += needle.len();
            last = i;
        } else {
            i += 1;
        }
    }
    if last < chars.len() {
        parts.push((chars[last..].iter().collect(), false));
    }
    parts
}

/// Подсветка совпадений в тексте
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    split_matches(text, filter)
        .into_iter()
        .map(|(part, hit)| {
            if hit {
                view! { <mark class="search-highlight">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row(&'static str, u32);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "count" => self.1.cmp(&other.1),
                _ => cmp_ci(self.0, other.0),
            }
        }
    }

    #[test]
    fn test_sort_list() {
        let mut rows = vec![Row("beta", 1), Row("Alpha", 3), Row("gamma", 2)];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec!["Alpha", "beta", "gamma"]);

        sort_list(&mut rows, "count", false);
        assert_eq!(rows.iter().map(|r| r.1).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_split_matches() {
        assert_eq!(
            split_matches("Grand Hotel", "HOT"),
            vec![
                ("Grand ".to_string(), false),
                ("Hot".to_string(), true),
                ("el".to_string(), false),
            ]
        );
        assert_eq!(split_matches("spa", ""), vec![("spa".to_string(), false)]);
        assert_eq!(
            split_matches("Schloß", "loß"),
            vec![("Sch".to_string(), false), ("loß".to_string(), true)]
        );
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "email", true), " ⇅");
    }
}
