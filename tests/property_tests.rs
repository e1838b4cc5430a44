use proptest::prelude::*;
use rhuffman::{build_tree, compress, decompress, flatten, unflatten, EncodedData};

proptest! {
    #[test]
    fn compress_roundtrip(text in "\\PC{2,200}") {
        prop_assume!(text.chars().any(|c| Some(c) != text.chars().next()));

        let data = compress(&text).unwrap();
        prop_assert!(data.is_consistent());
        prop_assert_eq!(decompress(&data).unwrap(), text);
    }

    #[test]
    fn flatten_roundtrip(text in "[a-f ]{2,100}") {
        prop_assume!(text.chars().any(|c| Some(c) != text.chars().next()));

        let tree = build_tree(&text).unwrap();
        let (shape, leaves) = flatten(&tree);
        prop_assert_eq!(shape.len(), 2 * leaves.len() - 1);
        prop_assert_eq!(unflatten(&shape, &leaves).unwrap(), tree);
    }

    #[test]
    fn toml_roundtrip(text in "\\PC{2,100}") {
        prop_assume!(text.chars().any(|c| Some(c) != text.chars().next()));

        let data = compress(&text).unwrap();
        let parsed = EncodedData::from_toml(&data.to_toml().unwrap()).unwrap();
        prop_assert_eq!(parsed, data);
    }

    #[test]
    fn compress_is_deterministic(text in "[a-z]{2,50}") {
        prop_assume!(text.chars().any(|c| Some(c) != text.chars().next()));

        prop_assert_eq!(compress(&text).unwrap(), compress(&text).unwrap());
    }
}
