//! End-to-end decoding against the built-in tables

use charref::{decode, tables, Decoder, Dialect, ReferenceTable};

fn table_for(dialect: Dialect) -> ReferenceTable {
    dialect.builtin_table().unwrap()
}

const ALL: [Dialect; 3] = [Dialect::MinimalXml, Dialect::Html4, Dialect::Html5];

#[test]
fn test_scenarios() {
    let html4 = table_for(Dialect::Html4);
    let html5 = table_for(Dialect::Html5);

    assert_eq!(decode("2 &gt; 1", Dialect::Html5, &html5), "2 > 1");
    assert_eq!(decode("caf&eacute;", Dialect::Html4, &html4), "caf\u{e9}");
    assert_eq!(decode("&#x4e2d;&#x6587;", Dialect::Html5, &html5), "\u{4e2d}\u{6587}");
    assert_eq!(decode("&notin;", Dialect::Html5, &html5), "\u{2209}");
    assert_eq!(decode("&#x00;", Dialect::Html5, &html5), "\u{FFFD}");
    assert_eq!(decode("&#x00;", Dialect::Html4, &html4), "\u{0}");
}

#[test]
fn test_text_without_ampersand_is_unchanged() {
    let samples = [
        "",
        "plain",
        "semi;colons; #hash x41; lt;",
        "\u{4e2d}\u{6587} \u{1F600} caf\u{e9}",
        "<p>markup without references</p>",
    ];
    for dialect in ALL {
        let table = table_for(dialect);
        for sample in samples {
            assert_eq!(decode(sample, dialect, &table), sample);
        }
    }
}

#[test]
fn test_every_name_resolves() {
    for dialect in ALL {
        let table = table_for(dialect);
        let decoder = Decoder::new(dialect, &table);
        for reference in table.iter() {
            assert_eq!(table.lookup_exact(reference.name()), Some(reference.value()));
            assert_eq!(table.longest_prefix_at_start(reference.name()), Some(reference));
            assert_eq!(decoder.decode(&reference.to_string()), reference.value());
        }
    }
}

#[test]
fn test_longest_prefix_with_suffix() {
    for dialect in ALL {
        let table = table_for(dialect);
        for reference in table.iter() {
            let candidate = format!("{}~;x", reference.name());
            assert_eq!(
                table.longest_prefix_at_start(&candidate).map(|r| r.name()),
                Some(reference.name())
            );
        }
    }
}

#[test]
fn test_numeric_round_trip() {
    let mut out = String::new();
    for dialect in ALL {
        let table = tables::minimal_xml();
        let decoder = Decoder::new(dialect, &table);
        let valid = (0x20..=0xD7FF_u32).chain(0xE000..=0x10FFFF);

        for cp in valid {
            if dialect.remaps_c1_controls() && (0x80..=0x9F).contains(&cp) {
                continue;
            }
            let expected = char::from_u32(cp).unwrap();

            out.clear();
            decoder.decode_to(&format!("&#{cp};"), &mut out);
            assert_eq!(out.chars().collect::<Vec<_>>(), [expected], "decimal {cp:#x}");

            out.clear();
            decoder.decode_to(&format!("&#x{cp:X};"), &mut out);
            assert_eq!(out.chars().collect::<Vec<_>>(), [expected], "hex {cp:#x}");
        }
    }
}

#[test]
fn test_overflow_containment() {
    let html5 = table_for(Dialect::Html5);
    assert_eq!(decode("&#1234567890;", Dialect::Html5, &html5), "\u{FFFD}");
    assert_eq!(decode("&#x1234567890abcdef;", Dialect::Html5, &html5), "\u{FFFD}");
    assert_eq!(decode("&#1234567890z;", Dialect::Html5, &html5), "\u{FFFD}z;");

    for dialect in [Dialect::MinimalXml, Dialect::Html4] {
        let table = table_for(dialect);
        assert_eq!(decode("&#1234567890;", dialect, &table), "&#1234567890;");
        assert_eq!(
            decode("&#x1234567890abcdef; &amp;", dialect, &table),
            "&#x1234567890abcdef; &"
        );
    }
}

#[test]
fn test_dialect_tables_differ() {
    let xml = table_for(Dialect::MinimalXml);
    let html4 = table_for(Dialect::Html4);
    let html5 = table_for(Dialect::Html5);

    assert_eq!(decode("&apos;&eacute;", Dialect::MinimalXml, &xml), "'&eacute;");
    assert_eq!(decode("&apos;&eacute;", Dialect::Html4, &html4), "&apos;\u{e9}");
    assert_eq!(decode("&apos;&eacute;", Dialect::Html5, &html5), "'\u{e9}");
    assert_eq!(decode("&NotEqualTilde;", Dialect::Html5, &html5), "\u{2242}\u{338}");
}

#[test]
fn test_html5_recovery() {
    let html5 = table_for(Dialect::Html5);
    assert_eq!(decode("&copy 2024", Dialect::Html5, &html5), "\u{a9} 2024");
    assert_eq!(decode("&notit;", Dialect::Html5, &html5), "\u{ac}it;");
    assert_eq!(decode("&#x80;&#x9D;", Dialect::Html5, &html5), "\u{20ac}\u{9d}");
    assert_eq!(decode("&#55296;", Dialect::Html5, &html5), "\u{FFFD}");
    assert_eq!(decode("&#65", Dialect::Html5, &html5), "A");

    let html4 = table_for(Dialect::Html4);
    assert_eq!(decode("&copy 2024", Dialect::Html4, &html4), "&copy 2024");
    assert_eq!(decode("&#x80;", Dialect::Html4, &html4), "\u{80}");
    assert_eq!(decode("&#55296;", Dialect::Html4, &html4), "&#55296;");
}

#[test]
fn test_parallel_matches_sequential() {
    let html5 = table_for(Dialect::Html5);
    let decoder = Decoder::new(Dialect::Html5, &html5);
    let inputs = ["&lt;a&gt;", "no refs", "&bogus; &amp", "&#x1F600;&#0;"];

    let parallel = charref::decode_parallel(&decoder, &inputs);
    let sequential: Vec<String> = inputs
        .iter()
        .map(|input| decoder.decode(input).into_owned())
        .collect();
    assert_eq!(parallel, sequential);
}

#[test]
fn test_table_shared_across_threads() {
    let html5 = table_for(Dialect::Html5);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let decoder = Decoder::new(Dialect::Html5, &html5);
                assert_eq!(decoder.decode("&hearts;&amp;&#9731;"), "\u{2665}&\u{2603}");
            });
        }
    });
}
