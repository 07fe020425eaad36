use burn::{
    nn::{
        conv::{Conv2d, Conv2dConfig},
        pool::{MaxPool2d, MaxPool2dConfig},
        BatchNorm, BatchNormConfig,
        Dropout, DropoutConfig,
        Linear, LinearConfig,
        PaddingConfig2d,
    },
    prelude::*,
    tensor::backend::AutodiffBackend,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct CnnConfig {
    pub num_classes: usize,
    pub image_size:  usize,
    /// Dropout after each conv block
    #[config(default = 0.25)]
    pub conv_dropout: f64,
    /// Dropout after the dense hidden layer
    #[config(default = 0.5)]
    pub dense_dropout: f64,
}

/// Channel widths of the three conv blocks.
const CHANNELS: [usize; 4] = [3, 32, 64, 128];
/// Hidden width of the dense head.
const HIDDEN: usize = 512;

impl CnnConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> CnnModel<B> {
        let block1 = self.build_conv_block(CHANNELS[0], CHANNELS[1], device);
        let block2 = self.build_conv_block(CHANNELS[1], CHANNELS[2], device);
        let block3 = self.build_conv_block(CHANNELS[2], CHANNELS[3], device);

        // Each block is a valid-padded 3x3 conv followed by a 2x2 pool,
        // so the spatial side shrinks as s → (s - 2) / 2 per block.
        let mut side = self.image_size;
        for _ in 0..3 {
            side = (side - 2) / 2;
        }
        let feature_dim = CHANNELS[3] * side * side;

        let fc1     = LinearConfig::new(feature_dim, HIDDEN).init(device);
        let fc2     = LinearConfig::new(HIDDEN, self.num_classes).init(device);
        let dropout = DropoutConfig::new(self.dense_dropout).init();

        CnnModel { block1, block2, block3, fc1, fc2, dropout }
    }

    fn build_conv_block<B: Backend>(
        &self,
        in_channels:  usize,
        out_channels: usize,
        device:       &B::Device,
    ) -> ConvBlock<B> {
        let conv = Conv2dConfig::new([in_channels, out_channels], [3, 3])
            .with_padding(PaddingConfig2d::Valid)
            .init(device);
        let norm    = BatchNormConfig::new(out_channels).init(device);
        let pool    = MaxPool2dConfig::new([2, 2]).with_strides([2, 2]).init();
        let dropout = DropoutConfig::new(self.conv_dropout).init();
        ConvBlock { conv, norm, pool, dropout }
    }
}

#[derive(Module, Debug)]
pub struct ConvBlock<B: Backend> {
    pub conv:    Conv2d<B>,
    pub norm:    BatchNorm<B, 2>,
    pub pool:    MaxPool2d,
    pub dropout: Dropout,
}

impl<B: Backend> ConvBlock<B> {
    pub fn forward(&self, x: Tensor<B, 4>) -> Tensor<B, 4> {
        let x = burn::tensor::activation::relu(self.conv.forward(x));
        let x = self.norm.forward(x);
        let x = self.pool.forward(x);
        self.dropout.forward(x)
    }
}

#[derive(Module, Debug)]
pub struct CnnModel<B: Backend> {
    pub block1:  ConvBlock<B>,
    pub block2:  ConvBlock<B>,
    pub block3:  ConvBlock<B>,
    pub fc1:     Linear<B>,
    pub fc2:     Linear<B>,
    pub dropout: Dropout,
}

impl<B: Backend> CnnModel<B> {
    /// images: [batch, 3, size, size] → logits: [batch, num_classes]
    pub fn forward(&self, images: Tensor<B, 4>) -> Tensor<B, 2> {
        let x = self.block1.forward(images);
        let x = self.block2.forward(x);
        let x = self.block3.forward(x);

        // [batch, channels, h, w] → [batch, channels * h * w]
        let x = x.flatten::<2>(1, 3);

        let x = burn::tensor::activation::relu(self.fc1.forward(x));
        let x = self.dropout.forward(x);

        // Raw logits — cross-entropy applies the softmax internally,
        // and inference only needs the argmax.
        self.fc2.forward(x)
    }

    pub fn forward_loss(
        &self,
        images:  Tensor<B, 4>,
        targets: Tensor<B, 1, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 2>)
    where
        B: AutodiffBackend,
    {
        let logits = self.forward(images);
        let ce = burn::nn::loss::CrossEntropyLossConfig::new()
            .init(&logits.device());
        let loss = ce.forward(logits.clone(), targets);
        (loss, logits)
    }
}
