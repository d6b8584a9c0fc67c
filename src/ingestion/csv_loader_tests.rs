#[cfg(test)]
mod tests {
    use crate::ingestion::csv_loader::{load_movies_csv, parse_movies_csv};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to create a temp movie list file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_parse_basic_movie_list() {
        let content = "year;title;studios;producers;winner\n\
                       1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes\n\
                       1980;Cruising;Lorimar Productions;Jerry Weintraub;\n";

        let (movies, stats) = parse_movies_csv(content).unwrap();

        assert_eq!(stats.total_rows, 2);
        assert_eq!(stats.loaded, 2);
        assert_eq!(stats.skipped, 0);
        assert_eq!(movies[0].year, 1980);
        assert_eq!(movies[0].title, "Can't Stop the Music");
        assert_eq!(movies[0].producers, "Allan Carr");
        assert!(movies[0].winner);
        assert!(!movies[1].winner);
    }

    #[test]
    fn test_parse_rejects_wrong_header() {
        let content = "ano;titulo;estudios;produtores;vencedor\n1980;A;B;C;yes\n";
        let err = parse_movies_csv(content).unwrap_err();
        assert!(err.to_string().contains("Invalid movie list header"));
    }

    #[test]
    fn test_parse_rejects_missing_column() {
        let content = "year;title;studios;winner\n1980;A;B;yes\n";
        let err = parse_movies_csv(content).unwrap_err();
        assert!(err.to_string().contains("producers"));
    }

    #[test]
    fn test_parse_skips_row_with_non_integer_year() {
        let content = "year;title;studios;producers;winner\n\
                       not-a-year;Broken;Studio;Someone;yes\n\
                       1981;Mommie Dearest;Paramount Pictures;Frank Yablans;yes\n";

        let (movies, stats) = parse_movies_csv(content).unwrap();

        assert_eq!(stats.total_rows, 2);
        assert_eq!(stats.loaded, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Mommie Dearest");
    }

    #[test]
    fn test_parse_winner_flag_is_trimmed_and_case_insensitive() {
        let content = "year;title;studios;producers;winner\n\
                       1980;A;S;P1; YES \n\
                       1981;B;S;P2;Yes\n\
                       1982;C;S;P3;no\n\
                       1983;D;S;P4;\n";

        let (movies, _) = parse_movies_csv(content).unwrap();

        assert!(movies[0].winner);
        assert!(movies[1].winner);
        assert!(!movies[2].winner);
        assert!(!movies[3].winner);
    }

    #[test]
    fn test_parse_short_row_missing_winner_cell() {
        // flexible rows: a missing trailing cell reads as empty, not an error
        let content = "year;title;studios;producers;winner\n1980;A;S;P1\n";

        let (movies, stats) = parse_movies_csv(content).unwrap();

        assert_eq!(stats.loaded, 1);
        assert!(!movies[0].winner);
    }

    #[test]
    fn test_parse_trims_display_fields() {
        let content = "year;title;studios;producers;winner\n 1980 ; A Title ; A Studio ; A Producer ;yes\n";

        let (movies, _) = parse_movies_csv(content).unwrap();

        assert_eq!(movies[0].title, "A Title");
        assert_eq!(movies[0].studios, "A Studio");
        assert_eq!(movies[0].producers, "A Producer");
    }

    #[test]
    fn test_load_movies_csv_from_file() {
        let content = "year;title;studios;producers;winner\n\
                       1990;The Adventures of Ford Fairlane;20th Century Fox;Steve Perry and Joel Silver;yes\n";
        let temp_file = create_temp_csv(content);

        let dataset = load_movies_csv(temp_file.path()).unwrap();

        assert_eq!(dataset.movies.len(), 1);
        assert_eq!(dataset.stats.loaded, 1);
        assert_eq!(dataset.checksum.len(), 64);
    }

    #[test]
    fn test_load_movies_csv_missing_file() {
        let err = load_movies_csv(std::path::Path::new("does-not-exist.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to read movie list"));
    }

    #[test]
    fn test_load_same_content_same_checksum() {
        let content = "year;title;studios;producers;winner\n1980;A;S;P;yes\n";
        let first = create_temp_csv(content);
        let second = create_temp_csv(content);

        let a = load_movies_csv(first.path()).unwrap();
        let b = load_movies_csv(second.path()).unwrap();

        assert_eq!(a.checksum, b.checksum);
    }
}
