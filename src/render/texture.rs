use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch and decode an image through the browser's own loader.
async fn load_image(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("image {} failed to load: {:?}", url, e))?;
    Ok(img)
}

/// Rasterize a decoded image into RGBA bytes via an offscreen 2D canvas.
fn image_rgba(img: &web::HtmlImageElement) -> anyhow::Result<(Vec<u8>, u32, u32)> {
    let width = img.natural_width();
    let height = img.natural_height();
    if width == 0 || height == 0 {
        anyhow::bail!("image decoded to zero size");
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    ctx.draw_image_with_html_image_element(img, 0.0, 0.0)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok((data.data().0, width, height))
}

fn upload_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    pixels: &[u8],
    width: u32,
    height: u32,
) -> wgpu::TextureView {
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

/// A 1x1 white texture used wherever a real map is unavailable.
pub(crate) fn white_pixel(device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::TextureView {
    upload_rgba(device, queue, "white_pixel", &[0xff, 0xff, 0xff, 0xff], 1, 1)
}

/// Load `url` as a texture; a load failure is logged and degrades to a
/// single-pixel fallback so the scene still comes up.
pub(crate) async fn load_or_fallback(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    url: &str,
    label: &str,
    fallback: [u8; 4],
) -> wgpu::TextureView {
    match load_image(url).await.and_then(|img| image_rgba(&img)) {
        Ok((pixels, width, height)) => upload_rgba(device, queue, label, &pixels, width, height),
        Err(e) => {
            log::error!("texture {}: {:?}", label, e);
            upload_rgba(device, queue, label, &fallback, 1, 1)
        }
    }
}
