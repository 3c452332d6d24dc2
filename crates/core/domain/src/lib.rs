//! 录音库领域模型：专辑实体与插入输入。

/// 专辑 ID（由数据库分配，创建后不可变）。
pub type AlbumId = i64;

/// 专辑记录（数据库中一行的瞬时副本）。
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f32,
}

impl Album {
    /// 去掉 id，得到可再次插入的输入。
    pub fn to_new(&self) -> NewAlbum {
        NewAlbum {
            title: self.title.clone(),
            artist: self.artist.clone(),
            price: self.price,
        }
    }
}

/// 新专辑输入。
///
/// 不含 id 字段：id 只能由数据库分配。
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f32,
}

impl NewAlbum {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, price: f32) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// 绑定数据库分配的 id，得到完整专辑。
    pub fn with_id(self, id: AlbumId) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            price: self.price,
        }
    }
}
