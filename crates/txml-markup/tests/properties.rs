use proptest::prelude::*;
use txml_markup::{
    ElementKind, MAX_CONTENT_LEN, MAX_STYLES, Rgba, StyleTable, hex_to_color, parse_document,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_six_digit_hex_decodes_exactly(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), upper in any::<bool>()) {
        let token = if upper {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        };
        prop_assert_eq!(hex_to_color(&token), Rgba::new(r, g, b, 255));
    }

    #[test]
    fn prop_non_hex_tokens_are_white(token in "[^#].{0,12}|#[0-9a-fA-F]{0,5}|#[0-9a-fA-F]{7,10}") {
        prop_assert_eq!(hex_to_color(&token), Rgba::WHITE);
    }

    #[test]
    fn prop_style_cap_keeps_earliest(n in 1usize..250, blocks in 1usize..4) {
        let mut src = String::new();
        let per_block = n.div_ceil(blocks);
        let mut emitted = 0;
        while emitted < n {
            src.push_str("<sty>\n");
            for _ in 0..per_block.min(n - emitted) {
                src.push_str(&format!("s{emitted} = #000000\n"));
                emitted += 1;
            }
            src.push_str("</sty>\n");
        }

        let table = StyleTable::parse(&src);
        prop_assert_eq!(table.len(), n.min(MAX_STYLES));
        for (i, style) in table.iter().enumerate() {
            prop_assert_eq!(&style.id, &format!("s{i}"));
        }
    }

    #[test]
    fn prop_texts_precede_buttons(kinds in prop::collection::vec(any::<bool>(), 0..40)) {
        let src: String = kinds
            .iter()
            .map(|&is_btn| if is_btn { "<btn>b</btn>" } else { "<text>t</text>" })
            .collect();
        let doc = parse_document(&src);

        let first_button = doc.elements.iter().position(|e| e.kind == ElementKind::Button);
        if let Some(at) = first_button {
            prop_assert!(doc.elements[at..].iter().all(|e| e.kind == ElementKind::Button));
        }
        prop_assert_eq!(doc.elements.len(), kinds.len());
    }

    #[test]
    fn prop_content_never_exceeds_limit(content in "[a-z ]{0,400}") {
        let doc = parse_document(&format!("<text>{content}</text>"));
        let got = &doc.elements[0].content;
        prop_assert_eq!(got.chars().count(), content.chars().count().min(MAX_CONTENT_LEN));
        prop_assert!(content.starts_with(got.as_str()));
    }
}
