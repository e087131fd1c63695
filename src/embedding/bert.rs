//! BERT sentence encoder (MiniLM-class sentence-transformers checkpoints).
//!
//! Output is the attention-masked mean of the last hidden layer, scaled to unit length.

use std::fs;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use tokenizers::Tokenizer;
use tracing::{debug, info};

use super::backend::EmbeddingBackend;
use super::config::{EmbeddingConfig, MODEL_CONFIG_FILE, MODEL_WEIGHTS_FILE};
use super::device::select_device;
use super::error::EmbeddingError;
use super::utils::{l2_normalize, load_tokenizer_with_truncation};

/// Sentence encoder backed by a candle [`BertModel`].
pub struct BertEmbedder {
    model: BertModel,
    tokenizer: Tokenizer,
    device: Device,
    hidden_size: usize,
    config: EmbeddingConfig,
}

impl std::fmt::Debug for BertEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BertEmbedder")
            .field("device", &format!("{:?}", self.device))
            .field("hidden_size", &self.hidden_size)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl BertEmbedder {
    /// Loads weights, config and tokenizer from `config.model_dir`.
    pub fn load(config: EmbeddingConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let model_dir = config
            .model_dir
            .clone()
            .ok_or_else(|| EmbeddingError::InvalidConfig {
                reason: "model_dir is required for the BERT backend".to_string(),
            })?;

        let device = select_device()?;
        debug!(?device, "Selected compute device for encoder");

        let config_path = model_dir.join(MODEL_CONFIG_FILE);
        let weights_path = model_dir.join(MODEL_WEIGHTS_FILE);

        let bert_config: Config = serde_json::from_str(&fs::read_to_string(&config_path)?)
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to parse {}: {}", config_path.display(), e),
            })?;

        // SAFETY: the weights file is opened read-only and must not be modified while mapped.
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)? };

        let model = load_bert(vb, &bert_config).map_err(|e| EmbeddingError::ModelLoadFailed {
            reason: format!("Failed to load BERT weights: {}", e),
        })?;

        let tokenizer = load_tokenizer_with_truncation(&model_dir, config.max_seq_len).map_err(
            |e| EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            },
        )?;

        info!(
            model_dir = %model_dir.display(),
            hidden_size = bert_config.hidden_size,
            max_seq_len = config.max_seq_len,
            "BERT encoder loaded"
        );

        Ok(Self {
            model,
            tokenizer,
            device,
            hidden_size: bert_config.hidden_size,
            config,
        })
    }

    fn embed_one(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            self.tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        if encoding.get_ids().is_empty() {
            return Ok(vec![0.0; self.hidden_size]);
        }

        debug!(
            text_len = text.len(),
            token_count = encoding.get_ids().len(),
            "Encoding chunk"
        );

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(encoding.get_type_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        // [1, seq_len, hidden]
        let hidden = self
            .model
            .forward(&input_ids, &type_ids, Some(&attention_mask))?;

        // Mean pooling over unmasked tokens.
        let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;
        let summed = hidden.broadcast_mul(&mask)?.sum(1)?;
        let counts = mask.sum(1)?;
        let mut pooled = summed.broadcast_div(&counts)?.squeeze(0)?.to_vec1::<f32>()?;

        l2_normalize(&mut pooled);
        Ok(pooled)
    }

    pub fn config(&self) -> &EmbeddingConfig {
        &self.config
    }
}

impl EmbeddingBackend for BertEmbedder {
    fn name(&self) -> &'static str {
        "bert"
    }

    fn embedding_dim(&self) -> usize {
        self.hidden_size
    }

    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        // Sequential: batching would need padding, which skews mean pooling without care.
        texts.iter().map(|text| self.embed_one(text)).collect()
    }
}

/// Sentence-transformers checkpoints store the encoder at the root; fine-tuned classifier
/// exports nest it under `bert.` or `roberta.`.
fn load_bert(vb: VarBuilder, config: &Config) -> candle_core::Result<BertModel> {
    if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
        BertModel::load(vb.pp("bert"), config)
    } else if vb.contains_tensor("roberta.embeddings.word_embeddings.weight") {
        BertModel::load(vb.pp("roberta"), config)
    } else {
        BertModel::load(vb, config)
    }
}
