/// The 80-category COCO vocabulary, indexed by model class id.
pub const COCO_CLASSES: [&str; 80] = [
    "person",
    "bicycle",
    "car",
    "motorcycle",
    "airplane",
    "bus",
    "train",
    "truck",
    "boat",
    "traffic light",
    "fire hydrant",
    "stop sign",
    "parking meter",
    "bench",
    "bird",
    "cat",
    "dog",
    "horse",
    "sheep",
    "cow",
    "elephant",
    "bear",
    "zebra",
    "giraffe",
    "backpack",
    "umbrella",
    "handbag",
    "tie",
    "suitcase",
    "frisbee",
    "skis",
    "snowboard",
    "sports ball",
    "kite",
    "baseball bat",
    "baseball glove",
    "skateboard",
    "surfboard",
    "tennis racket",
    "bottle",
    "wine glass",
    "cup",
    "fork",
    "knife",
    "spoon",
    "bowl",
    "banana",
    "apple",
    "sandwich",
    "orange",
    "broccoli",
    "carrot",
    "hot dog",
    "pizza",
    "donut",
    "cake",
    "chair",
    "couch",
    "potted plant",
    "bed",
    "dining table",
    "toilet",
    "tv",
    "laptop",
    "mouse",
    "remote",
    "keyboard",
    "cell phone",
    "microwave",
    "oven",
    "toaster",
    "sink",
    "refrigerator",
    "book",
    "clock",
    "vase",
    "scissors",
    "teddy bear",
    "hair drier",
    "toothbrush",
];

/// Human-readable label for a class index.
///
/// Indices outside the vocabulary get a synthetic `class_<N>` name rather
/// than failing.
pub fn label_for(class_id: u32) -> String {
    COCO_CLASSES
        .get(class_id as usize)
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("class_{class_id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_indices_resolve_to_coco_names() {
        assert_eq!(label_for(0), "person");
        assert_eq!(label_for(16), "dog");
        assert_eq!(label_for(79), "toothbrush");
    }

    #[test]
    fn unknown_indices_get_synthetic_labels() {
        assert_eq!(label_for(80), "class_80");
        assert_eq!(label_for(999), "class_999");
    }
}
