use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::{ImageBuffer, RgbImage};
use tower::Service;

use facetone::{
    AnalysisError, AnalysisRequest, AnalysisService, AnalyzerConfig, Budget, FaceAnalyzer,
    FaceLandmarks, LandmarkDetector, NormalizedPoint, Occasion, RecommendationEngine,
    RecommendationRequest, Rgb, SkinTone, Undertone,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

struct FixtureDetector {
    faces: Vec<FaceLandmarks>,
}

impl LandmarkDetector for FixtureDetector {
    fn detect(&self, _image: &RgbImage) -> Result<Vec<FaceLandmarks>, AnalysisError> {
        Ok(self.faces.clone())
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

fn encode_png(image: RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(image)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

/// Left half wheatish skin, right half lip red
fn wheatish_face_image() -> Vec<u8> {
    let image = ImageBuffer::from_fn(200, 200, |x, _| {
        if x < 100 {
            image::Rgb([180, 140, 110])
        } else {
            image::Rgb([170, 60, 70])
        }
    });
    encode_png(image)
}

fn face_mesh_landmarks() -> FaceLandmarks {
    let skin = NormalizedPoint::new(0.25, 0.5);
    let lip = NormalizedPoint::new(0.75, 0.5);
    let mut points = vec![skin; 478];
    // Lip region indices of the built-in Face Mesh table
    for index in [
        61, 84, 17, 314, 405, 291, 375, 321, 308, 324, 318, 402, 317, 14, 87, 178, 88, 95, 78,
        191, 80, 81, 82, 13, 312, 311, 310, 415,
    ] {
        points[index] = lip;
    }
    FaceLandmarks::new(points)
}

fn build_analyzer(faces: Vec<FaceLandmarks>) -> FaceAnalyzer {
    let detector = Arc::new(FixtureDetector { faces });
    FaceAnalyzer::new(detector, AnalyzerConfig::default()).unwrap()
}

#[test]
fn full_pipeline_classifies_wheatish_warm() {
    init_tracing();
    let analyzer = build_analyzer(vec![face_mesh_landmarks()]);
    let result = analyzer.analyze(&wheatish_face_image()).unwrap();

    // 180/140 > 1.1 and 180/110 > 1.2
    assert_eq!(result.skin_tone, SkinTone::Wheatish);
    assert_eq!(result.undertone, Undertone::Warm);
    assert_eq!(result.skin_tone_rgb, Rgb::new(180, 140, 110));
    assert_eq!(result.lip_color, Rgb::new(170, 60, 70));
    assert!(result.face_detected);
}

#[test]
fn data_url_and_raw_bytes_agree() {
    init_tracing();
    let analyzer = build_analyzer(vec![face_mesh_landmarks()]);
    let bytes = wheatish_face_image();
    let data_url = format!("data:image/png;base64,{}", BASE64.encode(&bytes));

    let from_bytes = analyzer.analyze(&bytes).unwrap();
    let from_url = analyzer.analyze_data_url(&data_url).unwrap();
    assert_eq!(from_bytes, from_url);
}

#[test]
fn repeated_analysis_is_byte_identical() {
    init_tracing();
    let analyzer = build_analyzer(vec![face_mesh_landmarks()]);
    let bytes = wheatish_face_image();

    let first = serde_json::to_vec(&analyzer.analyze(&bytes).unwrap()).unwrap();
    let second = serde_json::to_vec(&analyzer.analyze(&bytes).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn no_face_never_yields_a_result() {
    init_tracing();
    let analyzer = build_analyzer(vec![]);
    let err = analyzer.analyze(&wheatish_face_image()).unwrap_err();
    assert!(matches!(err, AnalysisError::NoFaceDetected));
}

#[tokio::test]
async fn service_feeds_recommendation_stage() {
    init_tracing();
    let analyzer = build_analyzer(vec![face_mesh_landmarks()]);
    let mut service = AnalysisService::new(Arc::new(analyzer));

    let result = service
        .call(AnalysisRequest::from_bytes(wheatish_face_image()))
        .await
        .unwrap();

    let recs = RecommendationEngine::generate(&RecommendationRequest {
        skin_tone: result.skin_tone,
        undertone: result.undertone,
        occasion: Occasion::Casual,
        budget: Budget::Under500,
    });
    assert!(recs.lipsticks.iter().any(|l| l.name == "Coral Bliss"));
    assert!(recs.accessories[0].colors.contains(&"Gold".to_string()));
}
