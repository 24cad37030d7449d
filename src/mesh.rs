use glam::Vec3;

/// Indexed triangle mesh data, ready for upload as vertex/index buffers.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Append another mesh, rebasing its indices.
    pub fn append(&mut self, other: &MeshData) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }
}

/// Unit-radius UV sphere. `(lat + 1) * (lon + 1)` vertices, shared seam
/// column duplicated so the texture wraps cleanly.
pub fn uv_sphere(lat_segments: u32, lon_segments: u32) -> MeshData {
    let lat_segments = lat_segments.max(3);
    let lon_segments = lon_segments.max(3);

    let mut mesh = MeshData::default();
    for i in 0..=lat_segments {
        let v = i as f32 / lat_segments as f32;
        let theta = v * std::f32::consts::PI;
        let (sin_t, cos_t) = theta.sin_cos();

        for j in 0..=lon_segments {
            let u = j as f32 / lon_segments as f32;
            let phi = u * std::f32::consts::TAU;
            let (sin_p, cos_p) = phi.sin_cos();

            let p = [sin_t * sin_p, cos_t, sin_t * cos_p];
            mesh.positions.push(p);
            mesh.normals.push(p);
            mesh.uvs.push([u, v]);
        }
    }

    let stride = lon_segments + 1;
    for i in 0..lat_segments {
        for j in 0..lon_segments {
            let a = i * stride + j;
            let b = a + stride;
            mesh.indices
                .extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    mesh
}

/// Thin disc marker: a squat cylinder in local space with +Z facing outward
/// once placed on the globe.
pub fn marker_disc(radius: f32, height: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let half = height * 0.5;
    let mut mesh = MeshData::default();

    // Caps, each with a center vertex and its own ring so normals stay flat.
    for &(z, nz) in &[(half, 1.0_f32), (-half, -1.0_f32)] {
        let center = mesh.positions.len() as u32;
        mesh.positions.push([0.0, 0.0, z]);
        mesh.normals.push([0.0, 0.0, nz]);
        mesh.uvs.push([0.5, 0.5]);
        for k in 0..=segments {
            let ang = k as f32 / segments as f32 * std::f32::consts::TAU;
            let (s, c) = ang.sin_cos();
            mesh.positions.push([radius * c, radius * s, z]);
            mesh.normals.push([0.0, 0.0, nz]);
            mesh.uvs.push([0.5 + 0.5 * c, 0.5 + 0.5 * s]);
        }
        for k in 0..segments {
            mesh.indices
                .extend_from_slice(&[center, center + 1 + k, center + 2 + k]);
        }
    }

    // Side wall
    let side = mesh.positions.len() as u32;
    for &z in &[half, -half] {
        for k in 0..=segments {
            let ang = k as f32 / segments as f32 * std::f32::consts::TAU;
            let (s, c) = ang.sin_cos();
            mesh.positions.push([radius * c, radius * s, z]);
            mesh.normals.push([c, s, 0.0]);
            mesh.uvs.push([k as f32 / segments as f32, if z > 0.0 { 0.0 } else { 1.0 }]);
        }
    }
    let ring = segments + 1;
    for k in 0..segments {
        let a = side + k;
        let b = a + ring;
        mesh.indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
    }

    mesh
}

/// Extrude a tube of `radial_segments` sides along a sampled curve,
/// using parallel-transported frames so the rings do not twist.
pub fn tube(centers: &[Vec3], radius: f32, radial_segments: usize) -> MeshData {
    assert!(centers.len() >= 2);
    let radial = radial_segments.max(3);
    let n = centers.len();

    let tangent = |i: usize| -> Vec3 {
        let prev = centers[i.saturating_sub(1)];
        let next = centers[(i + 1).min(n - 1)];
        (next - prev).try_normalize().unwrap_or(Vec3::X)
    };

    // Initial frame: pick the axis least aligned with the first tangent.
    let t0 = tangent(0);
    let seed = if t0.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    let mut normal = (seed - t0 * seed.dot(t0)).normalize();

    let mut mesh = MeshData::default();
    for i in 0..n {
        let t = tangent(i);
        normal = (normal - t * normal.dot(t))
            .try_normalize()
            .unwrap_or(normal);
        let binormal = t.cross(normal);

        for k in 0..=radial {
            let ang = k as f32 / radial as f32 * std::f32::consts::TAU;
            let (s, c) = ang.sin_cos();
            let offset = normal * c + binormal * s;
            mesh.positions.push((centers[i] + offset * radius).to_array());
            mesh.normals.push(offset.to_array());
            mesh.uvs
                .push([k as f32 / radial as f32, i as f32 / (n - 1) as f32]);
        }
    }

    let ring = (radial + 1) as u32;
    for i in 0..(n - 1) as u32 {
        for k in 0..radial as u32 {
            let a = i * ring + k;
            let b = a + ring;
            mesh.indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    mesh
}
