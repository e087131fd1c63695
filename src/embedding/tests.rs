use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::similarity::cosine_similarity;

mod config_tests {
    use super::*;
    use crate::constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN};
    use std::path::PathBuf;

    #[test]
    fn test_embedding_config_default() {
        let config = EmbeddingConfig::default();
        assert!(config.model_dir.is_none());
        assert_eq!(config.max_seq_len, DEFAULT_MAX_SEQ_LEN);
        assert_eq!(config.embedding_dim, DEFAULT_EMBEDDING_DIM);
        assert!(!config.testing_stub);
    }

    #[test]
    fn test_embedding_config_new() {
        let config = EmbeddingConfig::new("/models/minilm");
        assert_eq!(config.model_dir, Some(PathBuf::from("/models/minilm")));
        assert!(!config.testing_stub);
    }

    #[test]
    #[serial_test::serial]
    fn test_embedding_config_from_env() {
        // SAFETY: Test code only, serialized with other env-mutating tests.
        unsafe { std::env::set_var(EmbeddingConfig::ENV_MODEL_PATH, "  /models/minilm  ") };
        let config = EmbeddingConfig::from_env().expect("should parse");
        assert_eq!(config.model_dir, Some(PathBuf::from("/models/minilm")));

        // SAFETY: Test code only, serialized with other env-mutating tests.
        unsafe { std::env::set_var(EmbeddingConfig::ENV_MODEL_PATH, "   ") };
        let config = EmbeddingConfig::from_env().expect("should parse");
        assert!(config.model_dir.is_none());

        // SAFETY: Test code only, serialized with other env-mutating tests.
        unsafe { std::env::remove_var(EmbeddingConfig::ENV_MODEL_PATH) };
    }

    #[test]
    fn test_stub_config_validates() {
        assert!(EmbeddingConfig::stub().validate().is_ok());
    }

    #[test]
    fn test_stub_config_zero_dim_rejected() {
        let err = EmbeddingConfig::stub()
            .with_embedding_dim(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_zero_seq_len_rejected() {
        let err = EmbeddingConfig::stub()
            .with_max_seq_len(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_missing_model_dir_rejected() {
        let err = EmbeddingConfig::default().validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_nonexistent_model_dir() {
        let err = EmbeddingConfig::new("/nonexistent/minilm")
            .validate()
            .unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelNotFound { .. }));
        assert!(!EmbeddingConfig::new("/nonexistent/minilm").model_available());
    }

    #[test]
    fn test_incomplete_model_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("config.json"), "{}").expect("write");

        let config = EmbeddingConfig::new(dir.path());
        assert!(!config.model_available());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelLoadFailed { .. }));
        assert!(err.to_string().contains("model.safetensors"));
    }
}

mod stub_tests {
    use super::*;

    #[test]
    fn test_stub_zero_dim_rejected() {
        assert!(StubEmbedder::new(0).is_err());
    }

    #[test]
    fn test_stub_dimension_and_norm() {
        let stub = StubEmbedder::new(64).unwrap();
        let vectors = stub.encode(&["hello world"]).unwrap();

        assert_eq!(vectors.len(), 1);
        assert_eq!(vectors[0].len(), 64);
        let norm: f32 = vectors[0].iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_stub_is_deterministic() {
        let stub = StubEmbedder::new(128).unwrap();
        let a = stub.encode(&["same text"]).unwrap();
        let b = stub.encode(&["same text"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_stub_identical_text_has_unit_similarity() {
        let stub = StubEmbedder::new(384).unwrap();
        let vectors = stub
            .encode(&["Plagiarism detection", "plagiarism, DETECTION!"])
            .unwrap();
        assert!(cosine_similarity(&vectors[0], &vectors[1]) > 0.999);
    }

    #[test]
    fn test_stub_empty_text_is_zero_vector() {
        let stub = StubEmbedder::new(16).unwrap();
        let vectors = stub.encode(&["..."]).unwrap();
        assert!(vectors[0].iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_stub_preserves_input_order() {
        let stub = StubEmbedder::new(32).unwrap();
        let batch = stub.encode(&["first", "second"]).unwrap();
        assert_eq!(batch[0], stub.encode(&["first"]).unwrap()[0]);
        assert_eq!(batch[1], stub.encode(&["second"]).unwrap()[0]);
    }
}

mod runtime_tests {
    use super::*;

    #[test]
    fn test_unavailable_runtime() {
        let runtime = EmbeddingRuntime::unavailable();
        assert!(runtime.is_initialized());
        assert!(runtime.backend().is_none());
        assert!(!runtime.is_available());
    }

    #[test]
    fn test_with_backend_is_ready() {
        let runtime = EmbeddingRuntime::with_backend(Arc::new(StubEmbedder::new(8).unwrap()));
        assert!(runtime.is_initialized());
        assert_eq!(runtime.backend().map(|b| b.name()), Some("stub"));
    }

    #[test]
    fn test_lazy_runtime_defers_loading() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let runtime = EmbeddingRuntime::lazy(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(StubEmbedder::new(8)?) as Arc<dyn EmbeddingBackend>)
        });

        assert!(!runtime.is_initialized());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(runtime.backend().is_some());
        assert!(runtime.backend().is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_first_use_initializes_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let runtime = EmbeddingRuntime::lazy(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(20));
            Ok(Arc::new(StubEmbedder::new(8)?) as Arc<dyn EmbeddingBackend>)
        });

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| assert!(runtime.backend().is_some()));
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_load_is_cached_as_unavailable() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let runtime = EmbeddingRuntime::lazy(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(EmbeddingError::ModelLoadFailed {
                reason: "boom".to_string(),
            })
        });

        assert!(runtime.backend().is_none());
        assert!(runtime.backend().is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_from_config_stub() {
        let runtime = EmbeddingRuntime::from_config(EmbeddingConfig::stub().with_embedding_dim(16));
        let backend = runtime.backend().expect("stub backend");
        assert_eq!(backend.embedding_dim(), 16);
    }

    #[test]
    fn test_from_config_missing_model_is_unavailable() {
        let runtime = EmbeddingRuntime::from_config(EmbeddingConfig::new("/nonexistent/minilm"));
        assert!(runtime.backend().is_none());
    }

    #[test]
    fn test_runtime_debug_reports_state() {
        let runtime = EmbeddingRuntime::from_config(EmbeddingConfig::stub());
        assert!(format!("{:?}", runtime).contains("Uninitialized"));
        runtime.backend();
        assert!(format!("{:?}", runtime).contains("Ready(stub)"));
        assert!(format!("{:?}", EmbeddingRuntime::unavailable()).contains("Unavailable"));
    }
}

mod cache_tests {
    use super::*;

    #[test]
    fn test_cache_roundtrip() {
        let cache = EmbeddingCache::with_capacity(16);
        assert!(cache.get("stub", "chunk").is_none());

        cache.insert("stub", "chunk", Arc::new(vec![1.0, 0.0]));
        assert_eq!(cache.get("stub", "chunk").as_deref(), Some(&vec![1.0, 0.0]));
        assert!(cache.contains("stub", "chunk"));
        assert!(!cache.contains("bert", "chunk"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_clear() {
        let cache = EmbeddingCache::new();
        cache.insert("stub", "a", Arc::new(vec![0.5]));
        cache.clear();
        assert!(cache.get("stub", "a").is_none());
        assert!(cache.is_empty());
    }
}

mod bert_tests {
    use super::*;

    #[test]
    fn test_bert_load_without_model_dir_fails() {
        let err = BertEmbedder::load(EmbeddingConfig::default()).unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_bert_load_with_unparseable_config_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        for file in ["config.json", "model.safetensors", "tokenizer.json"] {
            std::fs::write(dir.path().join(file), "not valid").expect("write");
        }

        let err = BertEmbedder::load(EmbeddingConfig::new(dir.path())).unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelLoadFailed { .. }));
    }
}

#[test]
fn test_l2_normalize() {
    let mut v = vec![3.0f32, 4.0];
    utils::l2_normalize(&mut v);
    assert!((v[0] - 0.6).abs() < 1e-6);
    assert!((v[1] - 0.8).abs() < 1e-6);

    let mut zero = vec![0.0f32; 3];
    utils::l2_normalize(&mut zero);
    assert_eq!(zero, vec![0.0; 3]);
}
