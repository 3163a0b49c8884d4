use crate::domain::Report;
use unicode_normalization::UnicodeNormalization;

/// Lowercases `text`, decomposes it (NFD), and strips combining diacritical
/// marks in `U+0300..=U+036F`.
///
/// ```
/// assert_eq!(urbanfy::search::normalize("Água e Esgoto"), "agua e esgoto");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

/// Whether any searchable field of `report` contains `query`.
///
/// Plain lowercase containment is checked first so input that decomposes
/// unusually still matches case-insensitively; the normalized comparison
/// adds accent insensitivity on top.
#[must_use]
pub fn matches(report: &Report, query: &str) -> bool {
    let query_lower = query.to_lowercase();
    let query_normalized = normalize(query);

    report.searchable_fields().iter().any(|field| {
        field.to_lowercase().contains(&query_lower) || normalize(field).contains(&query_normalized)
    })
}

/// Returns the reports matching `query`, in their original order.
///
/// A query that is empty after trimming returns every report unchanged.
/// Otherwise the query is matched as typed, surrounding whitespace included.
/// Never fails and never mutates its inputs.
#[must_use]
pub fn filter(query: &str, reports: &[Report]) -> Vec<Report> {
    let _span = tracing::debug_span!(
        "search_filter",
        total_reports = reports.len(),
        query_len = query.len()
    )
    .entered();

    if query.trim().is_empty() {
        return reports.to_vec();
    }

    let filtered: Vec<Report> = reports
        .iter()
        .filter(|report| matches(report, query))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "search filter applied");

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str, titulo: &str, descricao: &str, endereco: &str, categoria: &str) -> Report {
        Report {
            id: id.to_string(),
            titulo: titulo.to_string(),
            descricao: descricao.to_string(),
            endereco: endereco.to_string(),
            categoria: categoria.to_string(),
            fotos: vec![],
            data_criacao: "2024-05-01T10:00:00".to_string(),
        }
    }

    fn sample() -> Vec<Report> {
        vec![
            report("1", "Vazamento", "Cano estourado", "Rua das Flores, 12", "Água e Esgoto"),
            report("2", "Poste apagado", "Sem luz há dias", "Av. Brasil, 300", "Iluminação e Energia"),
            report("3", "Buraco na via", "Buraco grande", "Rua X, 100", "Infraestrutura e Mobilidade"),
            report("4", "Lixo acumulado", "Calçada suja", "Praça São João", "Limpeza Urbana e Meio Ambiente"),
        ]
    }

    #[test]
    fn test_normalize_strips_accents() {
        assert_eq!(normalize("Iluminação"), "iluminacao");
        assert_eq!(normalize("SÃO JOÃO"), "sao joao");
        assert_eq!(normalize("plain"), "plain");
    }

    #[test]
    fn test_empty_or_blank_query_returns_all() {
        let reports = sample();
        assert_eq!(filter("", &reports), reports);
        assert_eq!(filter("   \t", &reports), reports);
    }

    #[test]
    fn test_accent_insensitive_category_match() {
        let reports = sample();
        let result = filter("agua", &reports);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn test_accented_query_matches_plain_text() {
        let reports = vec![report("9", "Calcada quebrada", "", "", "")];
        assert_eq!(filter("calçada", &reports).len(), 1);
    }

    #[test]
    fn test_case_insensitive_and_order_preserved() {
        let reports = sample();
        let ids: Vec<_> = filter("RUA", &reports).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_matches_every_searchable_field() {
        let reports = sample();
        assert_eq!(filter("estourado", &reports)[0].id, "1");
        assert_eq!(filter("brasil", &reports)[0].id, "2");
        assert_eq!(filter("mobilidade", &reports)[0].id, "3");
        assert_eq!(filter("lixo", &reports)[0].id, "4");
    }

    fn any_field_contains(report: &Report, query: &str) -> bool {
        let fields = [&report.titulo, &report.descricao, &report.endereco, &report.categoria];
        fields.iter().any(|field| {
            field.to_lowercase().contains(&query.to_lowercase())
                || normalize(field).contains(&normalize(query))
        })
    }

    #[test]
    fn test_result_partitions_input() {
        let reports = sample();
        for query in ["rua", "ã", "buraco", "zzz", "e", " buraco", "buraco ", " via ", "praca", "ÁGUA"] {
            let result = filter(query, &reports);
            for r in &reports {
                assert_eq!(
                    result.contains(r),
                    any_field_contains(r, query),
                    "query {query:?} id {}",
                    r.id
                );
            }
        }
    }

    #[test]
    fn test_padded_query_is_matched_as_typed() {
        let reports = vec![report("3", "Buraco", "", "", "")];
        assert!(filter(" buraco", &reports).is_empty());
        assert!(filter("buraco ", &reports).is_empty());
        assert_eq!(filter("buraco", &reports).len(), 1);

        let reports = sample();
        let ids: Vec<_> = filter(" na via", &reports).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let reports = sample();
        for query in ["", "rua", "energia", "nada"] {
            let once = filter(query, &reports);
            assert_eq!(filter(query, &once), once);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(filter("rua", &[]).is_empty());
        assert!(filter("", &[]).is_empty());
    }
}
